//! Error handling for share actions.
//!
//! Each external dependency of a share action gets its own error type:
//!
//! - **Metadata**: the dashboard's `json_metadata` document
//! - **Permalink**: the short-link HTTP service
//! - **Clipboard**: the system clipboard
//! - **Mail**: the OS `mailto:` handler
//!
//! [`ShareError`] consolidates them, and [`ShareResult<T>`] is the return
//! type used throughout the crate. Actions never surface these errors to the
//! user directly; the dispatch boundary logs the error with its code and
//! shows a uniform failure notification instead.

mod clipboard;
mod mail;
mod metadata;
mod permalink;
mod share_error;

// Re-export all public types
pub use clipboard::ClipboardError;
pub use mail::MailError;
pub use metadata::MetadataError;
pub use permalink::PermalinkError;
pub use share_error::{ShareError, ShareResult};
