//! Storage-mode selector over the two persistence backends.

use crate::error::StoreResult;
use crate::file_store::FileStore;
use crate::slot_store::SlotStore;
use plugkey_license::Serial;

/// The persistence backend a plugin installation uses.
pub enum LicenseStore {
    /// Obfuscated file under the host's preferences tree.
    File(FileStore),
    /// Fixed-size record in host-managed opaque storage.
    Slot(SlotStore),
}

impl LicenseStore {
    /// Writes the serial, replacing any previous one.
    pub fn store(&self, serial: &Serial) -> StoreResult<()> {
        match self {
            Self::File(store) => store.store(serial),
            Self::Slot(store) => store.store(serial),
        }
    }

    /// Reads the stored serial; absent or corrupt storage reads as `None`.
    pub fn read(&self) -> StoreResult<Option<Serial>> {
        match self {
            Self::File(store) => store.read(),
            Self::Slot(store) => store.read(),
        }
    }

    /// Erases the stored serial; returns the number of locations that
    /// changed state.
    pub fn delete(&self) -> StoreResult<usize> {
        match self {
            Self::File(store) => store.delete(),
            Self::Slot(store) => store.delete(),
        }
    }
}
