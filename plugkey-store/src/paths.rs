//! Preferences-tree layout for the license blob.
//!
//! The host keeps per-installation preferences under a hash-named base
//! directory; derivate installations (different build variants of the
//! same release) append a one-character suffix to the directory name.
//! A variant installation that has no blob of its own falls back to the
//! shared base directory, and deletes sweep every known location.

use std::path::{Path, PathBuf};

/// Directory the blob lives under, relative to a preferences directory.
const PLUGINS_DIR: &str = "plugins";

/// File name of the license blob.
const BLOB_FILE: &str = "license.key";

/// Placement of the license blob in the host's preferences tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefsLayout {
    base: PathBuf,
    variant: Option<char>,
}

impl PrefsLayout {
    /// Creates a layout over an explicit base directory.
    #[must_use]
    pub fn new(base: impl Into<PathBuf>, variant: Option<char>) -> Self {
        Self {
            base: base.into(),
            variant,
        }
    }

    /// Builds the default layout under the user's configuration
    /// directory, using the host's hash-named folder.
    #[must_use]
    pub fn discover(app_dir: &str, variant: Option<char>) -> Option<Self> {
        dirs::config_dir().map(|root| Self::new(root.join(app_dir), variant))
    }

    /// The shared base preferences directory (no variant suffix).
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    /// The preferences directory of the running installation variant.
    #[must_use]
    pub fn active_dir(&self) -> PathBuf {
        match self.variant {
            None => self.base.clone(),
            Some(suffix) => {
                let mut name = self
                    .base
                    .file_name()
                    .map(|n| n.to_os_string())
                    .unwrap_or_default();
                name.push(suffix.to_string());
                self.base.with_file_name(name)
            }
        }
    }

    /// Preference directories to consult, most specific first, deduped.
    #[must_use]
    pub fn known_dirs(&self) -> Vec<PathBuf> {
        let active = self.active_dir();
        if active == self.base {
            vec![active]
        } else {
            vec![active, self.base.clone()]
        }
    }

    /// Blob path for a plugin inside a given preferences directory.
    #[must_use]
    pub fn blob_path(dir: &Path, plugin_name: &str) -> PathBuf {
        dir.join(PLUGINS_DIR).join(plugin_name).join(BLOB_FILE)
    }
}
