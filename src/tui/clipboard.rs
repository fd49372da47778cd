//! Clipboard helper for copying the annotated sentence
//!
//! Uses `arboard` for cross-platform support. The clipboard is opened fresh
//! each time so no handle outlives the copy.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard.
///
/// Fails without a display server (headless Linux) or when access is denied.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}
