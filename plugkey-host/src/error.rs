//! Error types for host collaborator access.

use thiserror::Error;

/// Errors raised by the host collaborator wrappers.
#[derive(Debug, Error)]
pub enum HostError {
    /// Operation invoked off the designated host thread.
    #[error("operation must run on the designated host thread")]
    ContextViolation,

    /// Opaque storage record could not be read.
    #[error("host storage read failed: {0}")]
    SlotRead(String),

    /// Opaque storage record could not be written.
    #[error("host storage write failed: {0}")]
    SlotWrite(String),
}

/// Result type for host collaborator operations.
pub type HostResult<T> = Result<T, HostError>;
