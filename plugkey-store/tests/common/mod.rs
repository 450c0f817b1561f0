//! Shared test helpers for persistence tests.

#![allow(dead_code)]

use plugkey_host::{HostThread, Identity};
use plugkey_license::{generate, LicenseRequest, LicenseType, Serial, SerialScheme};
use plugkey_store::{FileStore, PrefsLayout};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

pub const PLUGIN_NAME: &str = "noise-deformer";

/// Identity from the reference scenario: U1/S1/P1.
pub fn test_identity() -> Identity {
    Identity {
        user_id: "U1".to_string(),
        system_id: "S1".to_string(),
        product_id: "P1".to_string(),
        account_licenses: BTreeMap::new(),
    }
}

/// A commercial, system-bound serial for the test identity.
pub fn test_serial() -> Serial {
    serial_for(&test_identity(), LicenseType::Commercial)
}

/// Generates a system-bound serial of the given type for an identity.
pub fn serial_for(identity: &Identity, license_type: LicenseType) -> Serial {
    let request = LicenseRequest {
        license_type,
        use_system_id: true,
        use_product_id: false,
    };
    generate(&SerialScheme::default(), identity, &request).unwrap()
}

/// File store rooted in a temp directory, guard captured on this thread.
pub fn file_store(root: &Path, variant: Option<char>) -> FileStore {
    let layout = PrefsLayout::new(root.join("a1b2c3"), variant);
    FileStore::new(layout, PLUGIN_NAME, Arc::new(HostThread::capture()))
}
