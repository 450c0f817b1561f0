//! Serial generation and validation for PlugKey.
//!
//! A serial binds a license to the identity the host reports: the scheme
//! hashes a salted payload of identity fields and encodes the claimed
//! license parameters in a plaintext prefix, so a serial is valid exactly
//! when re-deriving it from the current identity and its own prefix
//! reproduces it byte for byte.
//!
//! # Serial format
//!
//! `<type><sys><prod><reserved>-<GGGG>-...-<GGGG>`
//!
//! - `type`: C (commercial), D (demo), E (educational), N (NFR)
//! - `sys`/`prod`: '1'/'0', whether the system/product id is bound in
//! - `reserved`: always '0' (expiry-encoding extension point)
//! - hash groups: the first `key_length` uppercase hex characters of
//!   SHA-256 over `salt:user:ordinal[:system][:product]`, in groups of 4
//!
//! # Security posture
//!
//! This is a keep-honest-users-honest scheme: the salt ships inside the
//! binary, so it does not resist a motivated reverse engineer. A real
//! product needs asymmetric signing and proper secret management.

mod error;
mod event;
mod scheme;
mod serial;

pub use error::{LicenseError, LicenseResult};
pub use event::{LicenseEvent, LicenseWatcher};
pub use scheme::{SerialScheme, DEFAULT_KEY_LENGTH, MAX_KEY_LENGTH, MIN_KEY_LENGTH};
pub use serial::{generate, validate, LicenseRequest, LicenseType, Serial};
