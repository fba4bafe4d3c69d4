//! Mail handoff trait abstraction.

use async_trait::async_trait;

use crate::error::ShareResult;

/// Trait for opening an email draft via the operating system.
///
/// The crate never sends mail itself; it builds a `mailto:` URL and hands it
/// to whatever client the OS has registered for the scheme.
#[async_trait]
pub trait MailSink: Send + Sync {
    /// Open the system mail client with the draft described by `mailto_url`.
    ///
    /// Success means the handoff to the OS succeeded, not that a mail was
    /// sent or even that a client actually appeared.
    async fn compose(&self, mailto_url: &str) -> ShareResult<()>;
}
