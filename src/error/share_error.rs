//! Unified error type for share actions.
//!
//! Every step of a share action funnels into `ShareError`, so an action can
//! be written as one fallible pipeline and handled once at the notification
//! boundary.

use std::fmt;

use super::clipboard::ClipboardError;
use super::mail::MailError;
use super::metadata::MetadataError;
use super::permalink::PermalinkError;

/// Result alias used throughout the crate.
pub type ShareResult<T> = Result<T, ShareError>;

/// Unified error type for share actions.
#[derive(Debug, Clone)]
pub enum ShareError {
    /// The dashboard metadata could not be interpreted.
    Metadata(MetadataError),

    /// The permalink service could not produce a short link.
    Permalink(PermalinkError),

    /// The system clipboard rejected the copy.
    Clipboard(ClipboardError),

    /// The mail client could not be opened.
    Mail(MailError),

    /// View state could not be serialized to plain JSON data.
    Serialize { message: String },
}

impl ShareError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ShareError::Metadata(err) => err.error_code(),
            ShareError::Permalink(err) => err.error_code(),
            ShareError::Clipboard(err) => err.error_code(),
            ShareError::Mail(err) => err.error_code(),
            ShareError::Serialize { .. } => "E_SHARE_SERIALIZE",
        }
    }

    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            ShareError::Permalink(err) => err.is_retryable(),
            _ => false,
        }
    }
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::Metadata(err) => write!(f, "{}", err),
            ShareError::Permalink(err) => write!(f, "{}", err),
            ShareError::Clipboard(err) => write!(f, "{}", err),
            ShareError::Mail(err) => write!(f, "{}", err),
            ShareError::Serialize { message } => {
                write!(f, "Could not serialize view state: {}", message)
            }
        }
    }
}

impl std::error::Error for ShareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShareError::Metadata(err) => Some(err),
            ShareError::Permalink(err) => Some(err),
            ShareError::Clipboard(err) => Some(err),
            ShareError::Mail(err) => Some(err),
            ShareError::Serialize { .. } => None,
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<MetadataError> for ShareError {
    fn from(err: MetadataError) -> Self {
        ShareError::Metadata(err)
    }
}

impl From<PermalinkError> for ShareError {
    fn from(err: PermalinkError) -> Self {
        ShareError::Permalink(err)
    }
}

impl From<ClipboardError> for ShareError {
    fn from(err: ClipboardError) -> Self {
        ShareError::Clipboard(err)
    }
}

impl From<MailError> for ShareError {
    fn from(err: MailError) -> Self {
        ShareError::Mail(err)
    }
}
