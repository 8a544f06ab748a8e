//! Copying tool output to the system clipboard.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Nothing to copy")]
    Empty,

    #[error("Clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("Failed to set clipboard text: {0}")]
    Write(#[source] arboard::Error),
}

/// Place `text` on the system clipboard.
///
/// A clipboard handle is opened per call; on X11 the contents are owned by
/// this process, so they may vanish once the dashboard exits.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    if text.is_empty() {
        return Err(ClipboardError::Empty);
    }
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;
    clipboard
        .set_text(text.to_owned())
        .map_err(ClipboardError::Write)
}
