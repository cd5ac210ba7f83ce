// Help overlay: controls and the active settings

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

pub fn render(f: &mut Frame, app: &App) {
    let palette = &app.palette;
    let key_style = Style::default().fg(palette.operator.0);
    let desc_style = Style::default().fg(palette.foreground);
    let header_style = Style::default()
        .fg(palette.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(palette.border);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let input_cap = match app.engine.options().max_input_len {
        Some(n) => format!("{} digits", n),
        None => "unlimited".to_string(),
    };
    let mouse = if app.mouse_enabled { "on" } else { "off" };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Keypad", header_style)),
        kb("←↑↓→, hjkl", "Move focus"),
        kb("Enter/Space", "Press focused key"),
        kb("Click", "Press key under mouse"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("y", "Copy display"),
        kb("L", "Toggle logs"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Input: ", desc_style),
            Span::styled(input_cap, key_style),
            Span::styled("  |  Mouse: ", desc_style),
            Span::styled(mouse, key_style),
        ]),
    ]);

    let area = centered_rect(44, 18, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(palette.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.highlight))
                .border_type(palette.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let rect = centered_rect(44, 18, area);
        assert_eq!(rect, Rect::new(0, 0, 30, 10));

        let rect = centered_rect(10, 4, Rect::new(0, 0, 30, 10));
        assert_eq!(rect, Rect::new(10, 3, 10, 4));
    }
}
