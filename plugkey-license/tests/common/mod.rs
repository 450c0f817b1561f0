//! Shared test helpers for serial tests.

#![allow(dead_code)]

use plugkey_host::Identity;
use plugkey_license::{LicenseRequest, LicenseType, SerialScheme};
use std::collections::BTreeMap;

/// Identity from the reference scenario: U1/S1/P1.
pub fn test_identity() -> Identity {
    Identity {
        user_id: "U1".to_string(),
        system_id: "S1".to_string(),
        product_id: "P1".to_string(),
        account_licenses: BTreeMap::new(),
    }
}

/// Commercial request bound to the system id only.
pub fn commercial_system_request() -> LicenseRequest {
    LicenseRequest {
        license_type: LicenseType::Commercial,
        use_system_id: true,
        use_product_id: false,
    }
}

/// Request with a given type, bound to the system id only.
pub fn request_of(license_type: LicenseType) -> LicenseRequest {
    LicenseRequest {
        license_type,
        use_system_id: true,
        use_product_id: false,
    }
}

/// The reference scheme (default salt, 24 hex characters).
pub fn scheme() -> SerialScheme {
    SerialScheme::default()
}
