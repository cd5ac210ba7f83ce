// Title bar component
//
// App name on the left, help hint in the top-right border.

use crate::config::VERSION;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let palette = &app.palette;

    let title = Paragraph::new(format!(" padcalc v{}", VERSION))
        .style(
            Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(palette.border_type)
                .border_style(Style::default().fg(palette.border))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
