//! Mock implementations of the share action traits.
//!
//! Each mock records what flowed through it and can be switched into a
//! failure mode, so tests can assert both the happy paths and the exact
//! failure behavior of each action.

pub mod clipboard;
pub mod mail;
pub mod notify;
pub mod permalink;

pub use clipboard::MockClipboard;
pub use mail::MockMailer;
pub use notify::{MockNotifier, Notice};
pub use permalink::MockPermalinkService;
