//! Trait abstractions for dependency injection and testability.
//!
//! Share actions touch four external surfaces, each behind a trait so tests
//! can swap in recording mocks:
//!
//! - [`ClipboardSink`] - system clipboard access and writes
//! - [`MailSink`] - handing `mailto:` URLs to the OS
//! - [`PermalinkService`] - the short-link HTTP service
//! - [`Notifier`] - user-facing success/failure notifications

pub mod clipboard;
pub mod mail;
pub mod notify;
pub mod permalink;

pub use clipboard::{ClipboardSink, TextSource};
pub use mail::MailSink;
pub use notify::Notifier;
pub use permalink::{PermalinkRequest, PermalinkService};
