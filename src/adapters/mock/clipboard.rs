//! Mock clipboard for testing.
//!
//! Records every write and can be configured to fail at either phase,
//! letting tests pin down when actions touch the clipboard.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{ClipboardError, ShareResult};
use crate::traits::ClipboardSink;

/// Mock clipboard sink for testing.
///
/// # Example
///
/// ```ignore
/// use dashlink::adapters::mock::MockClipboard;
/// use dashlink::traits::ClipboardSink;
///
/// let clipboard = MockClipboard::new();
/// clipboard.copy_text("hello").await?;
/// assert_eq!(clipboard.copied_texts(), vec!["hello".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockClipboard {
    /// Every text successfully written, in write order
    copied: Arc<Mutex<Vec<String>>>,
    /// When set, acquire fails as if the clipboard were inaccessible
    unavailable: Arc<Mutex<bool>>,
    /// When set, writes fail after a successful acquire
    fail_writes: Arc<Mutex<bool>>,
}

impl MockClipboard {
    /// Create a new mock clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make acquire fail from now on.
    pub fn set_unavailable(&self) {
        *self.unavailable.lock().unwrap() = true;
    }

    /// Make writes fail from now on, while acquire still succeeds.
    pub fn set_write_failure(&self) {
        *self.fail_writes.lock().unwrap() = true;
    }

    /// Get all texts written so far, in order.
    pub fn copied_texts(&self) -> Vec<String> {
        self.copied.lock().unwrap().clone()
    }

    /// Get the most recent written text.
    pub fn last_copied(&self) -> Option<String> {
        self.copied.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ClipboardSink for MockClipboard {
    async fn acquire(&self) -> ShareResult<()> {
        if *self.unavailable.lock().unwrap() {
            return Err(ClipboardError::Unavailable {
                message: "mock clipboard is unavailable".to_string(),
            }
            .into());
        }
        Ok(())
    }

    async fn copy_text(&self, text: &str) -> ShareResult<()> {
        if *self.unavailable.lock().unwrap() {
            return Err(ClipboardError::Unavailable {
                message: "mock clipboard is unavailable".to_string(),
            }
            .into());
        }
        if *self.fail_writes.lock().unwrap() {
            return Err(ClipboardError::WriteFailed {
                message: "mock clipboard write failure".to_string(),
            }
            .into());
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
