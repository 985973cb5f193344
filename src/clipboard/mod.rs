//! Platform clipboard integration.
//!
//! A thin wrapper over `arboard` so copy failures surface through the
//! normal error taxonomy.  Values are copied verbatim; nothing here
//! (including error messages) ever contains the copied text, because
//! the text is usually a password.

use crate::errors::{HexLockError, Result};

/// Copy `text` verbatim to the platform clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| HexLockError::ClipboardError(format!("clipboard unavailable: {e}")))?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| HexLockError::ClipboardError(format!("copy failed: {e}")))
}
