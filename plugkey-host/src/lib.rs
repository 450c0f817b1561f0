//! Host-application collaborator abstractions for PlugKey.
//!
//! Plugins never talk to the host application directly for licensing
//! concerns; they go through the seams defined here:
//!
//! - [`Identity`] / [`IdentitySource`]: the user/system/product identity
//!   snapshot a license is bound to
//! - [`HostThread`]: the designated-thread precondition guard (the host
//!   forbids file I/O off its main thread)
//! - [`OpaqueSlot`]: a fixed-size byte record the host persists on a
//!   plugin's behalf
//!
//! Everything here is synchronous; the host's execution model has no
//! background work and no cancellation.

mod error;
mod identity;
mod slot;
mod thread;

pub use error::{HostError, HostResult};
pub use identity::{FixedIdentity, Identity, IdentitySource};
pub use slot::{MemorySlot, OpaqueSlot};
pub use thread::HostThread;
