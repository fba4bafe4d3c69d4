//! Notifier that writes notifications to the operational log.
//!
//! Host applications surface toasts through their own [`Notifier`]
//! implementation; this adapter is the fallback for headless use, keeping
//! the one-notification-per-action contract visible in logs.

use crate::traits::Notifier;

/// Notifier writing success at info level and failures at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    /// Create a new tracing-backed notifier.
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!("Notification (success): {}", message);
    }

    fn danger(&self, message: &str) {
        tracing::warn!("Notification (danger): {}", message);
    }
}
