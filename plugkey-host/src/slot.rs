//! Opaque fixed-size storage record kept by the host.
//!
//! The host persists one byte record per plugin identifier. The API has
//! no delete primitive; callers that want "absent" overwrite the record
//! with a placeholder of the same length.

use crate::error::{HostError, HostResult};
use std::sync::Mutex;

/// A fixed-size byte record the host stores on a plugin's behalf.
pub trait OpaqueSlot: Send + Sync {
    /// Reads the record; must return exactly `len` bytes.
    fn read(&self, len: usize) -> HostResult<Vec<u8>>;

    /// Writes the record, replacing any previous content.
    fn write(&self, data: &[u8]) -> HostResult<()>;
}

/// In-process [`OpaqueSlot`] for tests and headless tools.
///
/// Starts zero-filled, matching a host slot that has never been written.
#[derive(Debug)]
pub struct MemorySlot {
    data: Mutex<Vec<u8>>,
}

impl MemorySlot {
    /// Creates a zero-filled slot of the given record length.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            data: Mutex::new(vec![0; len]),
        }
    }
}

impl OpaqueSlot for MemorySlot {
    fn read(&self, len: usize) -> HostResult<Vec<u8>> {
        let data = self.data.lock().unwrap();
        if data.len() != len {
            return Err(HostError::SlotRead(format!(
                "record length mismatch: have {}, want {len}",
                data.len()
            )));
        }
        Ok(data.clone())
    }

    fn write(&self, bytes: &[u8]) -> HostResult<()> {
        let mut data = self.data.lock().unwrap();
        if data.len() != bytes.len() {
            return Err(HostError::SlotWrite(format!(
                "record length mismatch: have {}, writing {}",
                data.len(),
                bytes.len()
            )));
        }
        data.copy_from_slice(bytes);
        Ok(())
    }
}
