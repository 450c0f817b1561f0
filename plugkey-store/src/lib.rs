//! Serial persistence and the licensing context plugins integrate with.
//!
//! A plugin installation stores at most one serial, either as an
//! obfuscated file under the host's preferences tree or as a fixed-size
//! record in host-managed opaque storage. A corrupted or tampered store
//! always degrades to "no license", never to a crash or an assumed-valid
//! license. An unlicensed user is a legitimate operating state.
//!
//! All storage operations run on the host's designated thread; invoking
//! them anywhere else is a precondition violation, not a retryable error.

mod context;
mod error;
mod file_store;
mod obfuscate;
mod paths;
mod slot_store;
mod store;

pub use context::LicensingContext;
pub use error::{StoreError, StoreResult};
pub use file_store::FileStore;
pub use obfuscate::{deobfuscate, obfuscate};
pub use paths::PrefsLayout;
pub use slot_store::SlotStore;
pub use store::LicenseStore;
