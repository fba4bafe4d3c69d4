//! Prelude module for convenient imports.
//!
//! Re-exports the types a host application needs to wire up share actions.
//!
//! # Usage
//!
//! ```ignore
//! use dashlink::prelude::*;
//! ```

// Action types
pub use crate::share::{ShareActions, ShareConfig, ShareContext};

// Model types
pub use crate::models::{
    DashboardInfo, DashboardMetadata, FilterDescriptor, FilterEntry, FilterStateMap, ShareSnapshot,
};

// Trait seams
pub use crate::traits::{ClipboardSink, MailSink, Notifier, PermalinkRequest, PermalinkService};

// Production adapters
pub use crate::adapters::{HttpPermalinkClient, SystemClipboard, SystemMailer, TracingNotifier};

// Errors
pub use crate::error::{ShareError, ShareResult};
