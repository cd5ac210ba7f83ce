// Color palette for the TUI
//
// One fixed palette modeled on the phone calculator look: orange operators,
// light gray function keys, dark gray digits on a black background.

use super::keypad::KeyClass;
use crate::logging::LogLevel;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Resolved colors for every UI element
#[derive(Debug, Clone)]
pub struct Palette {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_type: BorderType,
    pub highlight: Color,
    pub muted: Color,

    // Display
    pub display: Color,
    pub error: Color,

    // Keys (background, foreground)
    pub operator: (Color, Color),
    pub function: (Color, Color),
    pub digit: (Color, Color),

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::Black,
            foreground: Color::White,
            border: Color::Rgb(80, 80, 80),
            border_type: BorderType::Rounded,
            highlight: Color::Rgb(255, 159, 10),
            muted: Color::Rgb(140, 140, 140),

            display: Color::White,
            error: Color::Rgb(255, 69, 58),

            operator: (Color::Rgb(255, 159, 10), Color::White),
            function: (Color::Rgb(165, 165, 165), Color::Black),
            digit: (Color::Rgb(51, 51, 51), Color::White),

            log_error: Color::Rgb(255, 69, 58),
            log_warn: Color::Rgb(255, 214, 10),
            log_info: Color::Rgb(100, 210, 255),
            log_debug: Color::Rgb(140, 140, 140),
        }
    }
}

impl Palette {
    /// Style for a key button
    ///
    /// A pressed key flashes with inverted colors; the focused key is bold.
    pub fn key_style(&self, class: KeyClass, focused: bool, pressed: bool) -> Style {
        let (bg, fg) = match class {
            KeyClass::Operator => self.operator,
            KeyClass::Function => self.function,
            KeyClass::Digit => self.digit,
        };

        let mut style = if pressed {
            Style::default().bg(fg).fg(bg)
        } else {
            Style::default().bg(bg).fg(fg)
        };
        if focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    /// Text color for a log level
    pub fn log_level(&self, level: LogLevel) -> Color {
        match level {
            LogLevel::Error => self.log_error,
            LogLevel::Warn => self.log_warn,
            LogLevel::Info => self.log_info,
            LogLevel::Debug | LogLevel::Trace => self.log_debug,
        }
    }
}
