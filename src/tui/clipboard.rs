//! Copying the display value to the system clipboard
//!
//! `arboard` handles Windows, macOS and Linux. A fresh handle is opened per
//! copy and dropped right after.

use crate::engine::ERROR_DISPLAY;
use anyhow::{bail, Context, Result};
use arboard::Clipboard;

/// Copy a display value, refusing the error marker
pub fn copy_value(display: &str) -> Result<()> {
    if display == ERROR_DISPLAY {
        bail!("Nothing to copy");
    }

    let mut clipboard = Clipboard::new().context("Clipboard unavailable")?;
    clipboard
        .set_text(display)
        .context("Failed to set clipboard text")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_marker_is_not_copied() {
        let err = copy_value(ERROR_DISPLAY).unwrap_err();
        assert_eq!(err.to_string(), "Nothing to copy");
    }
}
