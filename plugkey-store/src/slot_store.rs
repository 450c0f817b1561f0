//! Serial storage in a host-managed opaque record.
//!
//! The host storage API has no delete primitive and exposes records of a
//! fixed size, so absence is represented by an all-zero placeholder of
//! the serial's exact length: the record never changes size, and storage
//! never leaks whether a license is present.
//!
//! The record is NOT obfuscated in this scheme (a known weakness of the
//! reference design). The mitigation is that the serial self-verifies:
//! bytes planted here still have to re-derive from the current identity.

use crate::error::{StoreError, StoreResult};
use plugkey_host::{HostThread, OpaqueSlot};
use plugkey_license::{Serial, SerialScheme};
use std::sync::Arc;
use tracing::{debug, warn};

/// Stores the serial in a fixed-size host storage record.
pub struct SlotStore {
    slot: Arc<dyn OpaqueSlot>,
    record_len: usize,
    thread: Arc<HostThread>,
}

impl SlotStore {
    /// Creates a slot store sized for serials of the given scheme.
    #[must_use]
    pub fn new(slot: Arc<dyn OpaqueSlot>, scheme: &SerialScheme, thread: Arc<HostThread>) -> Self {
        Self {
            slot,
            record_len: scheme.serial_len(),
            thread,
        }
    }

    /// The fixed record length this store reads and writes.
    #[must_use]
    pub fn record_len(&self) -> usize {
        self.record_len
    }

    /// Writes the serial's raw UTF-8 bytes into the record.
    pub fn store(&self, serial: &Serial) -> StoreResult<()> {
        self.thread.check()?;

        let bytes = serial.as_str().as_bytes();
        if bytes.len() != self.record_len {
            return Err(StoreError::InvalidSerial(format!(
                "serial length {} does not fit the {}-byte record",
                bytes.len(),
                self.record_len
            )));
        }
        self.slot.write(bytes)?;
        debug!(len = self.record_len, "stored serial in host record");
        Ok(())
    }

    /// Reads the stored serial; the placeholder and any malformed record
    /// read as `None`.
    pub fn read(&self) -> StoreResult<Option<Serial>> {
        self.thread.check()?;

        let record = match self.slot.read(self.record_len) {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "host storage record unreadable");
                return Ok(None);
            }
        };
        if record.iter().all(|&b| b == 0) {
            return Ok(None);
        }
        let text = match String::from_utf8(record) {
            Ok(text) => text,
            Err(_) => {
                warn!("host storage record is not valid UTF-8");
                return Ok(None);
            }
        };
        match text.parse::<Serial>() {
            Ok(serial) => Ok(Some(serial)),
            Err(e) => {
                warn!(error = %e, "host storage record is malformed");
                Ok(None)
            }
        }
    }

    /// Overwrites the record with the all-zero placeholder.
    ///
    /// Returns 1 when the record changed state, 0 when it already held
    /// the placeholder. An unreadable record counts as already absent,
    /// same as on the read path.
    pub fn delete(&self) -> StoreResult<usize> {
        self.thread.check()?;

        let record = match self.slot.read(self.record_len) {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "host storage record unreadable");
                return Ok(0);
            }
        };
        if record.iter().all(|&b| b == 0) {
            return Ok(0);
        }
        self.slot.write(&vec![0; self.record_len])?;
        debug!("cleared host storage record");
        Ok(1)
    }
}
