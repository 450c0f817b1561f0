//! Designated-thread precondition guard.
//!
//! The host application confines file I/O and GUI work to one thread and
//! leaves behavior off that thread undefined. The guard enforces this as
//! a hard precondition rather than a lock: a violation is a programming
//! error in the integrating plugin, not a retryable condition.

use crate::error::{HostError, HostResult};
use std::thread::{self, ThreadId};

/// Records the designated host thread at construction time.
///
/// Construct once during plugin registration (which the host runs on its
/// main thread) and share the guard with every component that touches
/// storage.
#[derive(Debug)]
pub struct HostThread {
    id: ThreadId,
}

impl HostThread {
    /// Captures the current thread as the designated one.
    #[must_use]
    pub fn capture() -> Self {
        Self {
            id: thread::current().id(),
        }
    }

    /// Returns true when called from the designated thread.
    #[must_use]
    pub fn is_designated(&self) -> bool {
        thread::current().id() == self.id
    }

    /// Fails with [`HostError::ContextViolation`] off the designated thread.
    pub fn check(&self) -> HostResult<()> {
        if self.is_designated() {
            Ok(())
        } else {
            Err(HostError::ContextViolation)
        }
    }
}
