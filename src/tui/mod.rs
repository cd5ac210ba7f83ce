// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks)
// - Routing input to the keypad, modal and app actions

pub mod app;
pub mod bigtext;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod keypad;
pub mod layout;
pub mod modal;
pub mod theme;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use keypad::Direction;
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Terminal features switched on at startup, so teardown undoes exactly those
#[derive(Debug, Clone, Copy)]
struct TerminalModes {
    mouse: bool,
    /// Press/repeat/release reporting (kitty keyboard protocol)
    event_types: bool,
}

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done. Restoration also runs when setup fails halfway.
pub async fn run_tui(log_buffer: LogBuffer, config: Config) -> Result<()> {
    let modes = TerminalModes {
        mouse: config.mouse,
        event_types: supports_keyboard_enhancement().unwrap_or(false),
    };

    let result = match setup_terminal(modes) {
        Ok(mut terminal) => {
            let mut app = App::with_config(log_buffer, &config);
            run_event_loop(&mut terminal, &mut app).await
        }
        Err(e) => Err(e),
    };

    let restored = restore_terminal(modes);
    result.and(restored)
}

fn setup_terminal(modes: TerminalModes) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    if modes.mouse {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    if modes.event_types {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .context("Failed to enable key event reporting")?;
    }
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

/// Undo everything `setup_terminal` may have switched on
///
/// Every step runs even if an earlier one fails; the first error is returned.
fn restore_terminal(modes: TerminalModes) -> Result<()> {
    let mut stdout = io::stdout();

    let keyboard = if modes.event_types {
        execute!(stdout, PopKeyboardEnhancementFlags).context("Failed to reset key reporting")
    } else {
        Ok(())
    };
    let mouse = if modes.mouse {
        execute!(stdout, DisableMouseCapture).context("Failed to disable mouse capture")
    } else {
        Ok(())
    };
    let screen =
        execute!(stdout, LeaveAlternateScreen, Show).context("Failed to restore terminal");
    let raw = disable_raw_mode().context("Failed to disable raw mode");

    keyboard.and(mouse).and(screen).and(raw)
}

/// Main event loop
///
/// Waits on terminal input and a redraw tick with tokio::select!, so the
/// press flash and toast expire even when no keys arrive.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.clear_expired_toast();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Global → Keypad
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Every event goes through the input handler so held-key state stays in sync
    let key = key_event.code;
    let triggered = app.handle_key(key, key_event.kind);

    if handle_modal_input(app, &key_event, triggered) {
        return;
    }

    if !triggered {
        return;
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    let direction = match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Direction::Right),
        _ => None,
    };

    if let Some(direction) = direction {
        app.move_focus(direction);
    } else if matches!(key, KeyCode::Enter | KeyCode::Char(' ')) {
        app.press_focused();
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind {
        // A click anywhere dismisses the help overlay
        if app.modal.is_some() {
            app.modal = None;
            return;
        }
        app.click(mouse_event.column, mouse_event.row);
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent, triggered: bool) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    if !triggered {
        return true;
    }

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
        ModalAction::Quit => {
            app.modal = None;
            app.should_quit = true;
        }
    }

    true
}

/// Handle global keys - returns true if handled
/// Only called for events the input handler let through
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('?') => {
            app.modal = Some(Modal::help());
            true
        }
        KeyCode::Char('y') => {
            copy_display(app);
            true
        }
        KeyCode::Char('L') => {
            app.toggle_logs();
            true
        }
        _ => false,
    }
}

fn copy_display(app: &mut App) {
    let display = app.engine.display().to_string();
    match clipboard::copy_value(&display) {
        Ok(()) => app.show_toast(format!("✓ Copied {}", display)),
        Err(e) => {
            tracing::debug!("Clipboard copy failed: {:#}", e);
            app.show_toast(format!("✗ {}", e));
        }
    }
}
