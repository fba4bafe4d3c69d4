//! Concrete implementations of trait abstractions.
//!
//! This module provides the production adapters behind the traits in
//! `crate::traits`, plus test doubles under [`mock`].
//!
//! # Adapters
//!
//! - [`SystemClipboard`] - clipboard writes via arboard
//! - [`SystemMailer`] - `mailto:` handoff via the `open` crate
//! - [`HttpPermalinkClient`] - permalink service client using reqwest
//! - [`TracingNotifier`] - notifications written to the log
//!
//! # Mock Implementations
//!
//! - [`mock::MockClipboard`] - records writes, configurable failures
//! - [`mock::MockMailer`] - records composed mailto URLs
//! - [`mock::MockPermalinkService`] - fixed short link, records requests
//! - [`mock::MockNotifier`] - records notifications in order

pub mod http_permalink;
pub mod mock;
pub mod system_clipboard;
pub mod system_mailer;
pub mod tracing_notifier;

pub use http_permalink::HttpPermalinkClient;
pub use system_clipboard::SystemClipboard;
pub use system_mailer::SystemMailer;
pub use tracing_notifier::TracingNotifier;
