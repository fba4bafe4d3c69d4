//! Mock mail sink for testing.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{MailError, ShareResult};
use crate::traits::MailSink;

/// Mock mail sink recording every composed `mailto:` URL.
#[derive(Debug, Clone, Default)]
pub struct MockMailer {
    /// Every mailto URL handed over, in order
    composed: Arc<Mutex<Vec<String>>>,
    /// When set, compose fails as if no mail client were registered
    fail: Arc<Mutex<bool>>,
}

impl MockMailer {
    /// Create a new mock mailer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make compose fail from now on.
    pub fn set_failure(&self) {
        *self.fail.lock().unwrap() = true;
    }

    /// Get all composed mailto URLs, in order.
    pub fn composed_urls(&self) -> Vec<String> {
        self.composed.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailSink for MockMailer {
    async fn compose(&self, mailto_url: &str) -> ShareResult<()> {
        if *self.fail.lock().unwrap() {
            return Err(MailError::LaunchFailed {
                message: "mock mail client launch failure".to_string(),
            }
            .into());
        }
        self.composed.lock().unwrap().push(mailto_url.to_string());
        Ok(())
    }
}
