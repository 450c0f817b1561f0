//! License-change notification types.
//!
//! Replaces polling a shared flag: components that gate functionality on
//! the license register a watcher with the licensing context and are
//! called synchronously when the state changes.

use crate::serial::LicenseType;
use serde::{Deserialize, Serialize};

/// A change in the installation's license state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseEvent {
    /// A serial was validated and stored.
    Activated {
        /// Type of the newly active license.
        license_type: LicenseType,
    },
    /// The stored serial was removed.
    Cleared,
}

/// Callback invoked synchronously on every license-state change.
pub type LicenseWatcher = Box<dyn Fn(&LicenseEvent) + Send + Sync>;
