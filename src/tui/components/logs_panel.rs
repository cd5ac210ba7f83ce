// Logs panel component
//
// Shows the newest entries from the in-memory log buffer, one per line,
// colored by level. Long lines are clipped at the panel edge.

use crate::logging::LogEntry;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Format a log entry for display: "HH:MM:SS LEVEL module: message"
fn format_log_entry(entry: &LogEntry) -> String {
    let module = entry.target.rsplit("::").next().unwrap_or(&entry.target);
    format!(
        "{} {:<5} {}: {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        module,
        entry.message
    )
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let palette = &app.palette;
    let height = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line> = app
        .log_buffer
        .tail(height)
        .iter()
        .map(|entry| {
            Line::from(Span::styled(
                format_log_entry(entry),
                Style::default().fg(palette.log_level(entry.level)),
            ))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(palette.border_type)
        .border_style(Style::default().fg(palette.border))
        .title(format!(" Logs ({}) ", app.log_buffer.len()));

    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(palette.background))
            .block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use chrono::{TimeZone, Utc};

    #[test]
    fn entry_format_has_time_level_message() {
        let entry = LogEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 9, 5, 7).unwrap(),
            level: LogLevel::Warn,
            target: "padcalc::engine".to_string(),
            message: "Division by zero".to_string(),
        };
        assert_eq!(format_log_entry(&entry), "09:05:07 WARN  engine: Division by zero");
    }
}
