// Display panel component
//
// Shows the engine's display value right-aligned. Short values are drawn
// with block glyphs; as the value grows it drops to plain text, and text
// wider than the panel keeps its rightmost digits.

use crate::tui::app::App;
use crate::tui::bigtext;
use crate::tui::layout::{truncate_left, DisplayScale};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let palette = &app.palette;
    let value = app.engine.display();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(palette.border_type)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);

    let color = if app.engine.is_error() {
        palette.error
    } else {
        palette.display
    };

    let lines: Vec<Line> = match DisplayScale::for_value(value, inner) {
        DisplayScale::Large => {
            let rows = bigtext::render(value).unwrap_or_default();
            // Bottom-align the glyphs inside taller panels
            let pad = (inner.height as usize).saturating_sub(rows.len());
            std::iter::repeat(Line::raw(""))
                .take(pad)
                .chain(rows.into_iter().map(Line::raw))
                .collect()
        }
        DisplayScale::Plain => {
            let pad = (inner.height as usize).saturating_sub(1) / 2;
            let text = truncate_left(value, inner.width as usize);
            std::iter::repeat(Line::raw(""))
                .take(pad)
                .chain(std::iter::once(Line::raw(text)))
                .collect()
        }
    };

    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Right)
        .style(
            Style::default()
                .fg(color)
                .bg(palette.background)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);

    f.render_widget(paragraph, area);
}
