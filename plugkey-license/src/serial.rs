//! Serial codec and validator.
//!
//! [`generate`] is a pure function from (identity, request) to a serial;
//! [`validate`] re-derives the candidate from the current identity and
//! the parameters claimed in its own prefix and compares byte for byte.

use crate::error::{LicenseError, LicenseResult};
use crate::scheme::SerialScheme;
use plugkey_host::Identity;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// The kind of license a serial grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseType {
    /// No valid license present. Sentinel state, never encodable in a serial.
    Unlicensed,
    /// Full commercial license.
    Commercial,
    /// Time- or feature-limited demo.
    Demo,
    /// Educational license.
    Educational,
    /// Not-for-resale license.
    Nfr,
}

impl LicenseType {
    /// Stable ordinal bound into the hash payload.
    #[must_use]
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::Unlicensed => 0,
            Self::Commercial => 1,
            Self::Demo => 2,
            Self::Educational => 3,
            Self::Nfr => 4,
        }
    }

    /// Plaintext prefix character, or None for the sentinel.
    #[must_use]
    pub fn prefix_char(&self) -> Option<char> {
        match self {
            Self::Unlicensed => None,
            Self::Commercial => Some('C'),
            Self::Demo => Some('D'),
            Self::Educational => Some('E'),
            Self::Nfr => Some('N'),
        }
    }

    /// Maps a prefix character back to a concrete license type.
    #[must_use]
    pub fn from_prefix_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Self::Commercial),
            'D' => Some(Self::Demo),
            'E' => Some(Self::Educational),
            'N' => Some(Self::Nfr),
            _ => None,
        }
    }

    /// Returns true for any concrete (non-sentinel) license type.
    #[must_use]
    pub fn is_licensed(&self) -> bool {
        !matches!(self, Self::Unlicensed)
    }
}

/// Parameters of a serial to be generated: license type and which
/// identity fields to bind in. Transient, built immediately before
/// calling [`generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseRequest {
    /// License type to encode. Must not be [`LicenseType::Unlicensed`].
    pub license_type: LicenseType,
    /// Bind the serial to the current system identifier.
    pub use_system_id: bool,
    /// Bind the serial to the running product identifier.
    pub use_product_id: bool,
}

/// A grammatically valid serial string with its parsed prefix.
///
/// Grammar: `^[CDEN][01]{3}-([A-F0-9]{4}-)+[A-F0-9]{1,4}$`. Holding a
/// `Serial` guarantees the grammar, not that the serial validates against
/// any particular identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Serial {
    raw: String,
    license_type: LicenseType,
    binds_system: bool,
    binds_product: bool,
}

impl Serial {
    /// Returns the canonical serial string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the license type claimed in the prefix.
    #[must_use]
    pub fn license_type(&self) -> LicenseType {
        self.license_type
    }

    /// Returns true when the serial binds the system identifier.
    #[must_use]
    pub fn binds_system(&self) -> bool {
        self.binds_system
    }

    /// Returns true when the serial binds the product identifier.
    #[must_use]
    pub fn binds_product(&self) -> bool {
        self.binds_product
    }

    /// Reconstructs the license request this serial claims to represent.
    #[must_use]
    pub fn request(&self) -> LicenseRequest {
        LicenseRequest {
            license_type: self.license_type,
            use_system_id: self.binds_system,
            use_product_id: self.binds_product,
        }
    }
}

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Serial {
    type Err = LicenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() < 5 || bytes[4] != b'-' {
            return Err(LicenseError::InvalidSerial(
                "serial must start with a 4-character prefix and a dash".to_string(),
            ));
        }

        let license_type = LicenseType::from_prefix_char(bytes[0] as char).ok_or_else(|| {
            LicenseError::InvalidSerial(format!("unknown type character {:?}", bytes[0] as char))
        })?;
        for &flag in &bytes[1..4] {
            if flag != b'0' && flag != b'1' {
                return Err(LicenseError::InvalidSerial(
                    "prefix flags must be '0' or '1'".to_string(),
                ));
            }
        }

        let groups: Vec<&str> = s[5..].split('-').collect();
        if groups.len() < 2 {
            return Err(LicenseError::InvalidSerial(
                "serial must carry at least two hash groups".to_string(),
            ));
        }
        for (i, group) in groups.iter().enumerate() {
            let last = i + 1 == groups.len();
            let len_ok = if last {
                (1..=4).contains(&group.len())
            } else {
                group.len() == 4
            };
            let chars_ok = group
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F'));
            if !len_ok || !chars_ok {
                return Err(LicenseError::InvalidSerial(format!(
                    "invalid hash group {group:?}"
                )));
            }
        }

        Ok(Self {
            raw: s.to_string(),
            license_type,
            binds_system: bytes[1] == b'1',
            binds_product: bytes[2] == b'1',
        })
    }
}

impl TryFrom<String> for Serial {
    type Error = LicenseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Serial> for String {
    fn from(serial: Serial) -> Self {
        serial.raw
    }
}

/// Derives the serial for an identity and request.
///
/// Deterministic and side-effect free: identical inputs produce the
/// identical serial byte for byte. Every bound field participates in the
/// hash payload, so changing any of them invalidates previously issued
/// serials. License parameters are cryptographically bound, not
/// advisory.
///
/// # Errors
///
/// Rejects the `Unlicensed` sentinel and any bound identity field that is
/// empty after trimming.
pub fn generate(
    scheme: &SerialScheme,
    identity: &Identity,
    request: &LicenseRequest,
) -> LicenseResult<Serial> {
    let type_char = request.license_type.prefix_char().ok_or_else(|| {
        LicenseError::InvalidRequest("the Unlicensed sentinel cannot be encoded".to_string())
    })?;

    let user_id = identity.user_id.trim();
    if user_id.is_empty() {
        return Err(LicenseError::MissingIdentity("user id"));
    }

    let mut payload = format!(
        "{}:{}:{}",
        scheme.salt(),
        user_id,
        request.license_type.ordinal()
    );
    if request.use_system_id {
        let system_id = identity.system_id.trim();
        if system_id.is_empty() {
            return Err(LicenseError::MissingIdentity("system id"));
        }
        payload.push(':');
        payload.push_str(system_id);
    }
    if request.use_product_id {
        let product_id = identity.product_id.trim();
        if product_id.is_empty() {
            return Err(LicenseError::MissingIdentity("product id"));
        }
        payload.push(':');
        payload.push_str(product_id);
    }

    let digest = Sha256::digest(payload.as_bytes());
    let key = hex::encode_upper(digest);
    let key = &key[..scheme.key_length()];

    let mut raw = String::with_capacity(scheme.serial_len());
    raw.push(type_char);
    raw.push(if request.use_system_id { '1' } else { '0' });
    raw.push(if request.use_product_id { '1' } else { '0' });
    // Reserved slot for a future expiry encoding.
    raw.push('0');
    for (i, c) in key.chars().enumerate() {
        if i % 4 == 0 {
            raw.push('-');
        }
        raw.push(c);
    }

    Ok(Serial {
        raw,
        license_type: request.license_type,
        binds_system: request.use_system_id,
        binds_product: request.use_product_id,
    })
}

/// Checks a candidate serial against the current identity.
///
/// Fails fast on anything outside the grammar; no hashing happens for
/// malformed input. A grammatical candidate is re-derived from the
/// request encoded in its own prefix and compared for exact equality,
/// dash placement included.
///
/// `validate(generate(identity, request), identity)` holds for every
/// request `generate` accepts.
#[must_use]
pub fn validate(scheme: &SerialScheme, candidate: &str, identity: &Identity) -> bool {
    let Ok(serial) = candidate.parse::<Serial>() else {
        return false;
    };
    match generate(scheme, identity, &serial.request()) {
        Ok(expected) => expected.as_str() == candidate,
        Err(_) => false,
    }
}
