// Keypad panel component
//
// Draws every key of the grid as a filled cell in its color class.
// Records the area it drew into so mouse clicks can be mapped back to keys.

use crate::tui::app::App;
use crate::tui::keypad;
use crate::tui::layout::key_cells;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Text},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    app.keypad_area = area;

    for (pos, key, rect) in key_cells(area) {
        // One column of gap between keys when there is room
        let cell = if rect.width > 2 {
            Rect {
                width: rect.width - 1,
                ..rect
            }
        } else {
            rect
        };

        let focused = keypad::key_at(app.focus) == Some(key);
        let style = app.palette.key_style(
            keypad::class(key.symbol),
            focused,
            app.is_flashing(pos),
        );

        let label = app.key_label(key.symbol);
        let label = if focused {
            format!("[ {} ]", label)
        } else {
            label.to_string()
        };

        let pad = (cell.height as usize).saturating_sub(1) / 2;
        let lines: Vec<Line> = std::iter::repeat(Line::raw(""))
            .take(pad)
            .chain(std::iter::once(Line::raw(label)))
            .collect();

        let button = Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .style(style);
        f.render_widget(button, cell);
    }
}
