//! Clipboard functionality for copying the calculator display.

use crate::error::ClipboardError;
use arboard::Clipboard;

/// Copy the display text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Access)?;

    clipboard
        .set_text(text.to_string())
        .map_err(ClipboardError::Write)?;

    tracing::debug!(text, "copied display to clipboard");
    Ok(())
}
