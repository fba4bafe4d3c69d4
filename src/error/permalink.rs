//! Errors raised by the permalink service client.

use std::fmt;

/// Failure to obtain a short link from the permalink service.
#[derive(Debug, Clone)]
pub enum PermalinkError {
    /// The request never produced a response (connection, DNS, TLS).
    RequestFailed { message: String },

    /// The service answered with a non-2xx status.
    ServerError { status: u16, message: String },

    /// The service answered 2xx but the body was not the expected shape.
    InvalidResponse { message: String },
}

impl PermalinkError {
    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            PermalinkError::RequestFailed { .. } => true,
            PermalinkError::ServerError { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            PermalinkError::InvalidResponse { .. } => false,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            PermalinkError::RequestFailed { .. } => "E_LINK_REQUEST",
            PermalinkError::ServerError { .. } => "E_LINK_STATUS",
            PermalinkError::InvalidResponse { .. } => "E_LINK_DECODE",
        }
    }
}

impl fmt::Display for PermalinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermalinkError::RequestFailed { message } => {
                write!(f, "Permalink request failed: {}", message)
            }
            PermalinkError::ServerError { status, message } => {
                write!(f, "Permalink service returned HTTP {}: {}", status, message)
            }
            PermalinkError::InvalidResponse { message } => {
                write!(f, "Invalid permalink response: {}", message)
            }
        }
    }
}

impl std::error::Error for PermalinkError {}

impl From<reqwest::Error> for PermalinkError {
    fn from(err: reqwest::Error) -> Self {
        PermalinkError::RequestFailed {
            message: err.to_string(),
        }
    }
}
