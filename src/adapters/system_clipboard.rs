//! System clipboard adapter backed by arboard.
//!
//! Uses `arboard` for OS-level clipboard access (NSPasteboard on macOS,
//! X11/Wayland on Linux). arboard's calls are blocking, so they run on the
//! runtime's blocking pool.

use async_trait::async_trait;

use crate::error::{ClipboardError, ShareResult};
use crate::traits::ClipboardSink;

/// Clipboard sink writing through the operating system clipboard.
///
/// A fresh clipboard handle is opened per call rather than held across
/// awaits; arboard handles are not meant to live long, and holding one would
/// keep the clipboard pinned between user actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Create a new system clipboard sink.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClipboardSink for SystemClipboard {
    async fn acquire(&self) -> ShareResult<()> {
        let opened = tokio::task::spawn_blocking(|| {
            arboard::Clipboard::new()
                .map(drop)
                .map_err(|e| ClipboardError::Unavailable {
                    message: e.to_string(),
                })
        })
        .await
        .map_err(|e| ClipboardError::Unavailable {
            message: e.to_string(),
        })?;
        opened?;
        Ok(())
    }

    async fn copy_text(&self, text: &str) -> ShareResult<()> {
        let text = text.to_string();
        let written = tokio::task::spawn_blocking(move || {
            let mut clipboard =
                arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable {
                    message: e.to_string(),
                })?;
            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::WriteFailed {
                    message: e.to_string(),
                })
        })
        .await
        .map_err(|e| ClipboardError::WriteFailed {
            message: e.to_string(),
        })?;
        written?;
        Ok(())
    }
}
