//! Clipboard trait abstraction.
//!
//! Provides a trait-based abstraction over the system clipboard, enabling
//! dependency injection and mocking in tests.

use async_trait::async_trait;

use crate::error::ShareResult;

/// Zero-argument producer for the text to copy.
///
/// Producers are only invoked once clipboard access is confirmed, so a
/// failed producer still means nothing was written.
pub type TextSource<'a> = &'a (dyn Fn() -> ShareResult<String> + Send + Sync);

/// Trait for clipboard write operations.
///
/// Access and writing are separate steps. [`acquire`](ClipboardSink::acquire)
/// probes for clipboard access without writing; an action that needs network
/// work before it has text to copy calls it up front, so a denied clipboard
/// costs nothing. [`copy_from`](ClipboardSink::copy_from) packages the common
/// acquire-produce-write sequence for actions whose text is computed locally.
#[async_trait]
pub trait ClipboardSink: Send + Sync {
    /// Probe clipboard access without writing anything.
    async fn acquire(&self) -> ShareResult<()>;

    /// Write text to the clipboard, replacing its previous contents.
    async fn copy_text(&self, text: &str) -> ShareResult<()>;

    /// Acquire the clipboard, produce the text, then write it.
    ///
    /// The producer runs strictly after a successful [`acquire`], and its
    /// failure aborts the copy with the clipboard contents untouched.
    ///
    /// [`acquire`]: ClipboardSink::acquire
    async fn copy_from(&self, source: TextSource<'_>) -> ShareResult<()> {
        self.acquire().await?;
        let text = source()?;
        self.copy_text(&text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockClipboard;
    use crate::error::{ClipboardError, ShareError};
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn test_copy_from_writes_produced_text() {
        let clipboard = MockClipboard::new();
        clipboard
            .copy_from(&|| Ok("produced".to_string()))
            .await
            .expect("Failed to copy");
        assert_eq!(clipboard.copied_texts(), vec!["produced".to_string()]);
    }

    #[tokio::test]
    async fn test_copy_from_skips_producer_when_acquire_fails() {
        let clipboard = MockClipboard::new();
        clipboard.set_unavailable();

        let produced = AtomicBool::new(false);
        let result = clipboard
            .copy_from(&|| {
                produced.store(true, Ordering::SeqCst);
                Ok("never".to_string())
            })
            .await;

        assert!(matches!(
            result,
            Err(ShareError::Clipboard(ClipboardError::Unavailable { .. }))
        ));
        assert!(!produced.load(Ordering::SeqCst));
        assert!(clipboard.copied_texts().is_empty());
    }

    #[tokio::test]
    async fn test_copy_from_aborts_on_producer_failure() {
        let clipboard = MockClipboard::new();
        let result = clipboard
            .copy_from(&|| {
                Err(ShareError::Serialize {
                    message: "no payload".to_string(),
                })
            })
            .await;

        assert!(matches!(result, Err(ShareError::Serialize { .. })));
        assert!(clipboard.copied_texts().is_empty());
    }
}
