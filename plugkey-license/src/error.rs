//! Error types for the serial codec.

use thiserror::Error;

/// Errors raised by serial generation and parsing.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// Serial string does not match the grammar.
    #[error("invalid serial format: {0}")]
    InvalidSerial(String),

    /// License request cannot be encoded (e.g. the Unlicensed sentinel).
    #[error("invalid license request: {0}")]
    InvalidRequest(String),

    /// A required identity field is empty after trimming.
    #[error("missing identity field: {0}")]
    MissingIdentity(&'static str),

    /// Scheme parameters out of range.
    #[error("invalid serial scheme: {0}")]
    InvalidScheme(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for serial codec operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
