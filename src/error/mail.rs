//! Errors raised while handing a draft to the mail client.

use std::fmt;

/// Failure to open the system mail client.
#[derive(Debug, Clone)]
pub enum MailError {
    /// The OS handler for `mailto:` URLs could not be launched.
    LaunchFailed { message: String },
}

impl MailError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            MailError::LaunchFailed { .. } => "E_MAIL_LAUNCH",
        }
    }
}

impl fmt::Display for MailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailError::LaunchFailed { message } => {
                write!(f, "Could not open mail client: {}", message)
            }
        }
    }
}

impl std::error::Error for MailError {}
