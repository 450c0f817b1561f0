//! The identity snapshot a license is bound to.
//!
//! The host supplies identity as a flat string-keyed mapping. Keys may be
//! missing on older host builds, so every lookup substitutes an
//! empty-string default rather than failing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping key for the current user identifier.
pub const KEY_USER_ID: &str = "user_id";
/// Mapping key for the current system identifier.
pub const KEY_SYSTEM_ID: &str = "system_id";
/// Mapping key for the running product identifier.
pub const KEY_PRODUCT_ID: &str = "product_id";
/// Prefix for per-product seat-count entries (`seats.<product-key>`).
pub const KEY_SEATS_PREFIX: &str = "seats.";

/// Immutable identity snapshot supplied by the host once per process.
///
/// Not owned or persisted by this subsystem; treated as read-only for the
/// lifetime of a generation or validation operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Current user identifier.
    pub user_id: String,
    /// Current system (machine) identifier.
    pub system_id: String,
    /// Identifier of the running product variant.
    pub product_id: String,
    /// Seat counts per licensed product key on the account.
    pub account_licenses: BTreeMap<String, u32>,
}

impl Identity {
    /// Builds an identity from the host's string-keyed mapping.
    ///
    /// Missing identity keys become empty strings; seat counts that fail
    /// to parse become 0.
    #[must_use]
    pub fn from_map(fields: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| fields.get(key).cloned().unwrap_or_default();

        let mut account_licenses = BTreeMap::new();
        for (key, value) in fields {
            if let Some(product) = key.strip_prefix(KEY_SEATS_PREFIX) {
                let seats = value.trim().parse().unwrap_or(0);
                account_licenses.insert(product.to_string(), seats);
            }
        }

        Self {
            user_id: get(KEY_USER_ID),
            system_id: get(KEY_SYSTEM_ID),
            product_id: get(KEY_PRODUCT_ID),
            account_licenses,
        }
    }

    /// Returns the seat count for a product key, 0 when absent.
    #[must_use]
    pub fn seat_count(&self, product: &str) -> u32 {
        self.account_licenses.get(product).copied().unwrap_or(0)
    }
}

/// Supplies the current identity snapshot.
///
/// In the host process this wraps the licensing-information call; tests
/// and headless tools use [`FixedIdentity`].
pub trait IdentitySource: Send + Sync {
    /// Returns the identity of the current user/system/product.
    fn identity(&self) -> Identity;
}

/// An [`IdentitySource`] that returns a literal snapshot.
#[derive(Debug, Clone)]
pub struct FixedIdentity(pub Identity);

impl IdentitySource for FixedIdentity {
    fn identity(&self) -> Identity {
        self.0.clone()
    }
}
