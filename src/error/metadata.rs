//! Errors raised while reading dashboard metadata.

use std::fmt;

/// Failure to interpret the dashboard's `json_metadata` document.
///
/// Metadata is stored server-side as a JSON string and may predate the
/// current schema, so parsing it is treated as fallible everywhere.
#[derive(Debug, Clone)]
pub enum MetadataError {
    /// The metadata string is not valid JSON.
    InvalidJson { message: String },
}

impl MetadataError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            MetadataError::InvalidJson { .. } => "E_META_JSON",
        }
    }
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::InvalidJson { message } => {
                write!(f, "Invalid dashboard metadata: {}", message)
            }
        }
    }
}

impl std::error::Error for MetadataError {}

impl From<serde_json::Error> for MetadataError {
    fn from(err: serde_json::Error) -> Self {
        MetadataError::InvalidJson {
            message: err.to_string(),
        }
    }
}
