//! Serial scheme parameters: salt and truncated-hash length.

use crate::error::{LicenseError, LicenseResult};
use serde::{Deserialize, Serialize};

/// Hash length used by the reference scheme (24 hex characters, 6 groups).
pub const DEFAULT_KEY_LENGTH: usize = 24;

/// Brute-force floor for the truncated hash.
pub const MIN_KEY_LENGTH: usize = 16;

/// Full SHA-256 hex budget.
pub const MAX_KEY_LENGTH: usize = 64;

/// Salt baked into the reference scheme. Shipping a salt inside the
/// binary is a documented limitation of this scheme, not an oversight.
const DEFAULT_SALT: &str = "pk#7f3a1c#v2";

/// Parameters of the serial derivation: the salt mixed into the hash
/// payload and the number of hex characters kept from the digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialScheme {
    salt: String,
    key_length: usize,
}

impl SerialScheme {
    /// Creates a scheme with a custom salt and hash length.
    ///
    /// # Errors
    ///
    /// Rejects lengths outside [`MIN_KEY_LENGTH`]..=[`MAX_KEY_LENGTH`].
    pub fn new(salt: impl Into<String>, key_length: usize) -> LicenseResult<Self> {
        if !(MIN_KEY_LENGTH..=MAX_KEY_LENGTH).contains(&key_length) {
            return Err(LicenseError::InvalidScheme(format!(
                "key length {key_length} outside {MIN_KEY_LENGTH}..={MAX_KEY_LENGTH}"
            )));
        }
        Ok(Self {
            salt: salt.into(),
            key_length,
        })
    }

    /// Returns the payload salt.
    #[must_use]
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Returns the number of hex characters kept from the digest.
    #[must_use]
    pub fn key_length(&self) -> usize {
        self.key_length
    }

    /// Total length of a serial under this scheme: `key_length + 4`
    /// plaintext characters plus the separating dashes.
    #[must_use]
    pub fn serial_len(&self) -> usize {
        // One 4-char prefix group plus the hash groups, dash-separated.
        let groups = 1 + self.key_length.div_ceil(4);
        self.key_length + 4 + (groups - 1)
    }
}

impl Default for SerialScheme {
    fn default() -> Self {
        Self {
            salt: DEFAULT_SALT.to_string(),
            key_length: DEFAULT_KEY_LENGTH,
        }
    }
}
