//! Clipboard export of solved roots.

use crate::error::Result;
use arboard::Clipboard;

/// Place `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    Clipboard::new()?.set_text(text.to_owned())?;
    tracing::debug!("Copied {} bytes to clipboard", text.len());
    Ok(())
}
