//! Errors raised while writing to the system clipboard.

use std::fmt;

/// Failure to reach or write the system clipboard.
///
/// The two variants separate the access phase from the write phase: an
/// action that cannot open the clipboard should fail before it spends any
/// work producing the text to copy.
#[derive(Debug, Clone)]
pub enum ClipboardError {
    /// The clipboard could not be opened (no display server, denied access).
    Unavailable { message: String },

    /// The clipboard was open but the write did not stick.
    WriteFailed { message: String },
}

impl ClipboardError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClipboardError::Unavailable { .. } => "E_CLIP_ACCESS",
            ClipboardError::WriteFailed { .. } => "E_CLIP_WRITE",
        }
    }
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable { message } => {
                write!(f, "Clipboard unavailable: {}", message)
            }
            ClipboardError::WriteFailed { message } => {
                write!(f, "Clipboard write failed: {}", message)
            }
        }
    }
}

impl std::error::Error for ClipboardError {}
