//! Clipboard integration.

use crate::error::Result;
use arboard::Clipboard;

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Read text from clipboard.
pub fn read_from_clipboard() -> Result<String> {
    let mut clipboard = Clipboard::new()?;
    Ok(clipboard.get_text()?)
}
