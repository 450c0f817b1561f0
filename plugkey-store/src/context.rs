//! The licensing context handed to plugin hooks.
//!
//! One explicit object owns the identity source, the store, and the
//! scheme, with no process-wide static license state. Commands and objects
//! gate themselves on [`LicensingContext::license_type`] and can register
//! a watcher to be told when the state changes instead of polling.

use crate::error::{StoreError, StoreResult};
use crate::store::LicenseStore;
use plugkey_host::IdentitySource;
use plugkey_license::{validate, LicenseEvent, LicenseType, LicenseWatcher, Serial, SerialScheme};
use tracing::warn;

/// Licensing state for one plugin installation.
pub struct LicensingContext {
    identity: Box<dyn IdentitySource>,
    store: LicenseStore,
    scheme: SerialScheme,
    watchers: Vec<LicenseWatcher>,
}

impl LicensingContext {
    /// Creates a context over an identity source and a store.
    #[must_use]
    pub fn new(identity: Box<dyn IdentitySource>, store: LicenseStore, scheme: SerialScheme) -> Self {
        Self {
            identity,
            store,
            scheme,
            watchers: Vec::new(),
        }
    }

    /// Registers a watcher called synchronously on every state change.
    pub fn watch(&mut self, watcher: LicenseWatcher) {
        self.watchers.push(watcher);
    }

    /// Validates a candidate serial against the current identity and
    /// persists it.
    ///
    /// An invalid serial is a precondition violation: the caller (entry
    /// dialog or boot sequence) is expected to have a validated serial in
    /// hand. It fails with [`StoreError::InvalidSerial`] rather than
    /// degrading.
    pub fn activate(&self, candidate: &str) -> StoreResult<Serial> {
        let identity = self.identity.identity();
        if !validate(&self.scheme, candidate, &identity) {
            return Err(StoreError::InvalidSerial(
                "serial does not validate against the current identity".to_string(),
            ));
        }
        let serial: Serial = candidate
            .parse()
            .map_err(|e| StoreError::InvalidSerial(format!("{e}")))?;
        self.store.store(&serial)?;
        self.notify(&LicenseEvent::Activated {
            license_type: serial.license_type(),
        });
        Ok(serial)
    }

    /// Returns the active serial, if the store holds one that validates
    /// against the current identity.
    ///
    /// A stored serial bound to a different user, system, or product
    /// reads as `None`, for example after a preferences directory was
    /// copied to another machine.
    pub fn current(&self) -> StoreResult<Option<Serial>> {
        let Some(serial) = self.store.read()? else {
            return Ok(None);
        };
        let identity = self.identity.identity();
        if validate(&self.scheme, serial.as_str(), &identity) {
            Ok(Some(serial))
        } else {
            warn!("stored serial does not validate against the current identity");
            Ok(None)
        }
    }

    /// The license type dependent functionality gates on;
    /// [`LicenseType::Unlicensed`] when no valid serial is present.
    pub fn license_type(&self) -> StoreResult<LicenseType> {
        Ok(self
            .current()?
            .map(|serial| serial.license_type())
            .unwrap_or(LicenseType::Unlicensed))
    }

    /// Erases the stored serial; returns the number of storage locations
    /// that changed state.
    pub fn deactivate(&self) -> StoreResult<usize> {
        let removed = self.store.delete()?;
        if removed > 0 {
            self.notify(&LicenseEvent::Cleared);
        }
        Ok(removed)
    }

    fn notify(&self, event: &LicenseEvent) {
        for watcher in &self.watchers {
            watcher(event);
        }
    }
}
