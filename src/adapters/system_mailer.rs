//! Mail sink handing `mailto:` URLs to the operating system.

use async_trait::async_trait;

use crate::error::{MailError, ShareResult};
use crate::traits::MailSink;

/// Mail sink using the OS handler registered for the `mailto:` scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMailer;

impl SystemMailer {
    /// Create a new system mailer.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MailSink for SystemMailer {
    async fn compose(&self, mailto_url: &str) -> ShareResult<()> {
        open::that(mailto_url).map_err(|e| MailError::LaunchFailed {
            message: e.to_string(),
        })?;
        tracing::debug!("Handed mailto URL to OS handler");
        Ok(())
    }
}
