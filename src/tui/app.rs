// TUI application state
//
// Owns the calculator engine and everything the screen needs around it:
// keypad focus, the last pressed key (for the flash), modal, toast, and the
// keypad area from the last frame so mouse clicks can be mapped to keys.

use super::components::Toast;
use super::input::InputHandler;
use super::keypad::{self, Direction, KeyPos};
use super::layout;
use super::modal::Modal;
use super::theme::Palette;
use crate::config::Config;
use crate::engine::{Engine, Symbol};
use crate::logging::LogBuffer;
use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// How long a pressed key stays highlighted
const PRESS_FLASH: Duration = Duration::from_millis(120);

/// Main application state for the TUI
pub struct App {
    /// Calculator state
    pub engine: Engine,

    /// Keypad key with keyboard focus
    pub focus: KeyPos,

    /// Most recently pressed key and when
    pressed: Option<(KeyPos, Instant)>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Active modal overlay
    pub modal: Option<Modal>,

    /// Active toast notification
    pub toast: Option<Toast>,

    /// Whether the logs panel is shown
    pub show_logs: bool,

    /// Log buffer for the logs panel
    pub log_buffer: LogBuffer,

    /// Colors
    pub palette: Palette,

    /// Keypad area from the last render, for mouse hit testing
    pub keypad_area: Rect,

    /// Whether mouse clicks press keys
    pub mouse_enabled: bool,

    /// Input handler for repeat/debounce
    input_handler: InputHandler,
}

impl App {
    pub fn new(log_buffer: LogBuffer) -> Self {
        Self::with_config(log_buffer, &Config::default())
    }

    pub fn with_config(log_buffer: LogBuffer, config: &Config) -> Self {
        Self {
            engine: Engine::with_options(config.engine_options()),
            focus: KeyPos::default(),
            pressed: None,
            should_quit: false,
            modal: None,
            toast: None,
            show_logs: config.show_logs,
            log_buffer,
            palette: Palette::default(),
            keypad_area: Rect::default(),
            mouse_enabled: config.mouse,
            input_handler: InputHandler::default(),
        }
    }

    /// Press the key at `pos`, feeding its symbol to the engine
    pub fn press(&mut self, pos: KeyPos) {
        let Some(key) = keypad::key_at(pos) else {
            return;
        };
        self.apply(key.symbol);
        self.focus = pos;
        self.pressed = Some((pos, Instant::now()));
    }

    /// Press the focused key
    pub fn press_focused(&mut self) {
        self.press(self.focus);
    }

    /// Press whatever key lies under a mouse click
    pub fn click(&mut self, column: u16, row: u16) {
        if !self.mouse_enabled {
            return;
        }
        if let Some(pos) = layout::hit_test(self.keypad_area, column, row) {
            self.press(pos);
        }
    }

    fn apply(&mut self, symbol: Symbol) {
        let was_error = self.engine.is_error();
        self.engine.apply(symbol);

        if self.engine.is_error() && !was_error {
            tracing::info!(?symbol, "Calculation error");
        }
    }

    /// Move keyboard focus across the keypad
    pub fn move_focus(&mut self, direction: Direction) {
        self.focus = keypad::step(self.focus, direction);
    }

    /// Whether the key at `pos` was pressed recently enough to flash
    pub fn is_flashing(&self, pos: KeyPos) -> bool {
        self.pressed.is_some_and(|(p, at)| {
            keypad::key_at(p) == keypad::key_at(pos) && at.elapsed() < PRESS_FLASH
        })
    }

    /// Label for a key, reflecting engine state (AC/C)
    pub fn key_label(&self, symbol: Symbol) -> &'static str {
        keypad::label(symbol, self.engine.has_pending_operand())
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    /// Show a toast notification
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Drop the toast once it has expired
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Route a key event through the input handler - true if it should act
    pub fn handle_key(&mut self, key: KeyCode, kind: KeyEventKind) -> bool {
        self.input_handler.handle_key(key, kind)
    }
}
