//! Error types for serial persistence.

use plugkey_host::HostError;
use thiserror::Error;

/// Errors raised by the persistence shim.
///
/// Reads never surface storage corruption as an error; they degrade to
/// absence. What remains here are precondition violations and write-path
/// failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage accessed off the designated host thread.
    #[error("license store accessed off the designated host thread")]
    ContextViolation,

    /// A serial was rejected before reaching storage.
    #[error("serial rejected: {0}")]
    InvalidSerial(String),

    /// Underlying storage failed.
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<HostError> for StoreError {
    fn from(err: HostError) -> Self {
        match err {
            HostError::ContextViolation => Self::ContextViolation,
            other => Self::Storage(other.to_string()),
        }
    }
}

/// Result type for persistence operations.
pub type StoreResult<T> = Result<T, StoreError>;
