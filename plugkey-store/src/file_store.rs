//! File-backed serial storage.
//!
//! The blob is the XOR-obfuscated serial at
//! `<prefs dir>/plugins/<plugin-name>/license.key`, marked read-only
//! after writing to reduce accidental tampering. Reads degrade to `None`
//! on any failure; a corrupted store means "no license", never a crash.

use crate::error::{StoreError, StoreResult};
use crate::obfuscate::{deobfuscate, obfuscate};
use crate::paths::PrefsLayout;
use plugkey_host::HostThread;
use plugkey_license::Serial;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Stores the serial as an obfuscated file in the preferences tree.
pub struct FileStore {
    layout: PrefsLayout,
    plugin_name: String,
    thread: Arc<HostThread>,
}

impl FileStore {
    /// Creates a file store for one plugin installation.
    #[must_use]
    pub fn new(layout: PrefsLayout, plugin_name: impl Into<String>, thread: Arc<HostThread>) -> Self {
        Self {
            layout,
            plugin_name: plugin_name.into(),
            thread,
        }
    }

    /// Path of the blob in the running installation's directory.
    #[must_use]
    pub fn active_path(&self) -> PathBuf {
        PrefsLayout::blob_path(&self.layout.active_dir(), &self.plugin_name)
    }

    /// Writes the serial, replacing any previous blob.
    ///
    /// Always deletes first so a stale read-only blob cannot block the
    /// write and no partial overwrite survives.
    pub fn store(&self, serial: &Serial) -> StoreResult<()> {
        self.thread.check()?;
        self.delete()?;

        let path = self.active_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::Storage(format!("failed to create {parent:?}: {e}")))?;
        }
        fs::write(&path, obfuscate(serial.as_str().as_bytes()))
            .map_err(|e| StoreError::Storage(format!("failed to write {path:?}: {e}")))?;
        set_readonly(&path, true)
            .map_err(|e| StoreError::Storage(format!("failed to protect {path:?}: {e}")))?;

        debug!(path = %path.display(), "stored license blob");
        Ok(())
    }

    /// Reads the stored serial, falling back to the shared base
    /// preferences directory when the variant's own blob is absent.
    ///
    /// Returns `None` for missing, unreadable, corrupt, or malformed
    /// blobs.
    pub fn read(&self) -> StoreResult<Option<Serial>> {
        self.thread.check()?;

        for dir in self.layout.known_dirs() {
            let path = PrefsLayout::blob_path(&dir, &self.plugin_name);
            if !path.exists() {
                continue;
            }
            return Ok(self.decode_blob(&path));
        }
        Ok(None)
    }

    /// Removes the blob from every known derivate directory.
    ///
    /// Returns the number of locations that changed state; idempotent.
    pub fn delete(&self) -> StoreResult<usize> {
        self.thread.check()?;

        let mut removed = 0;
        for dir in self.layout.known_dirs() {
            let path = PrefsLayout::blob_path(&dir, &self.plugin_name);
            if !path.exists() {
                continue;
            }
            // The blob is stored read-only; lift that before removal.
            let _ = set_readonly(&path, false);
            fs::remove_file(&path)
                .map_err(|e| StoreError::Storage(format!("failed to remove {path:?}: {e}")))?;
            debug!(path = %path.display(), "removed license blob");
            removed += 1;
        }
        Ok(removed)
    }

    fn decode_blob(&self, path: &Path) -> Option<Serial> {
        let blob = match fs::read(path) {
            Ok(blob) => blob,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "license blob unreadable");
                return None;
            }
        };
        let plain = deobfuscate(&blob);
        let text = match String::from_utf8(plain) {
            Ok(text) => text,
            Err(_) => {
                warn!(path = %path.display(), "license blob is not valid UTF-8");
                return None;
            }
        };
        match text.parse::<Serial>() {
            Ok(serial) => Some(serial),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "license blob is malformed");
                None
            }
        }
    }
}

fn set_readonly(path: &Path, readonly: bool) -> std::io::Result<()> {
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_readonly(readonly);
    fs::set_permissions(path, perms)
}
