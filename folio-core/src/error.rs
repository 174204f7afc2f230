//! Error types for the Folio client

use thiserror::Error;

/// Fallback message for failing responses without a structured error body.
pub const REQUEST_FAILED: &str = "Request failed";

/// Core error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Error reported by the backend (the body's `error` field), or the
    /// generic fallback for failing responses without one. Display is the
    /// bare message so it can be shown in a status area verbatim.
    #[error("{0}")]
    Api(String),

    /// Network or connection failure before a response was obtained
    #[error("Transport error: {0}")]
    Transport(String),

    /// A success response whose body could not be parsed as JSON
    #[error("Malformed response: {0}")]
    Parse(String),

    /// A form field whose content could not be decoded on submit
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: String, reason: String },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

impl FolioError {
    /// Build an [`FolioError::InvalidField`] for a named form field.
    pub fn invalid_field(field: &str, source: serde_json::Error) -> Self {
        Self::InvalidField {
            field: field.to_string(),
            reason: source.to_string(),
        }
    }
}
