// Views module - screen-level rendering logic
//
// The calculator has a single screen. This module stacks the components
// top to bottom and draws overlays (help modal, toast) over them.

mod help;

use super::app::App;
use super::modal::Modal;
use crate::tui::components::{display_panel, keypad_panel, logs_panel, status_bar, title_bar};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

const TITLE_HEIGHT: u16 = 3;
const DISPLAY_HEIGHT: u16 = 7;
const LOGS_HEIGHT: u16 = 8;
const STATUS_HEIGHT: u16 = 2;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.palette.background));
    f.render_widget(bg_block, f.area());

    let logs_height = if app.show_logs { LOGS_HEIGHT } else { 0 };
    let [title, display, keypad, logs, status] = Layout::vertical([
        Constraint::Length(TITLE_HEIGHT),
        Constraint::Length(DISPLAY_HEIGHT),
        Constraint::Min(10),
        Constraint::Length(logs_height),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(f.area());

    title_bar::render(f, title, app);
    display_panel::render(f, display, app);
    keypad_panel::render(f, keypad, app);
    if app.show_logs {
        logs_panel::render(f, logs, app);
    }
    status_bar::render(f, status, app);

    // Modal overlay (on top of everything)
    if let Some(Modal::Help) = app.modal {
        help::render(f, app);
    }

    // Toast notification (on top of modal too)
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.palette);
    }

    app.clear_expired_toast();
}
