// Components module - reusable UI building blocks
//
// Rendered top to bottom:
// - Title bar: app name and help hint
// - Display panel: the current value, scaled to fit
// - Keypad panel: the button grid
// - Logs panel: recent log entries (toggle with 'L')
// - Status bar: pending operation and key hints
//
// Each component is a focused, single-responsibility module.

pub mod display_panel;
pub mod keypad_panel;
pub mod logs_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;
