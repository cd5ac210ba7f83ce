// Status bar component
//
// Left: the pending operation ("12 ×"). Right: key hints, trimmed on
// narrow terminals.

use crate::engine::{format_number, Engine, Operator};
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Pending left-hand side, e.g. "12 ×", or empty when nothing is pending
pub fn pending_text(engine: &Engine) -> String {
    match engine.pending_operator() {
        Operator::None => String::new(),
        op => format!(
            "{} {}",
            format_number(engine.pending_operand()),
            op.glyph()
        ),
    }
}

fn hints(bp: Breakpoint) -> &'static str {
    if bp.at_least(Breakpoint::Wide) {
        "←↑↓→ move │ Enter press │ y copy │ L logs │ ? help │ q quit "
    } else if bp.at_least(Breakpoint::Normal) {
        "Enter press │ ? help │ q quit "
    } else {
        "? q "
    }
}

/// Columns needed for a hint string
fn hint_width(hint: &str) -> u16 {
    hint.width() as u16
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let palette = &app.palette;
    let bp = Breakpoint::from_width(area.width);

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let hint = hints(bp);
    let [left, right] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(hint_width(hint)),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new(format!(" {}", pending_text(&app.engine)))
            .style(Style::default().fg(palette.highlight)),
        left,
    );
    f.render_widget(
        Paragraph::new(Line::from(hint).right_aligned())
            .style(Style::default().fg(palette.muted)),
        right,
    );
}
