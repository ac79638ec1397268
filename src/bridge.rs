//! Boolean surface for scripting hosts.
//!
//! Hosts that can only consume a success flag call these. Failures are
//! logged here, since the flag is all the caller gets.

use crate::domain::value_location;
use crate::error::{ErrorKind, RegistryError};
use crate::repositories::{self, PlatformStore};
use crate::store::RegistryStore;
use tracing::{error, info, warn, Level};

#[derive(Debug, Clone, Default)]
pub struct RegistryManager<S = PlatformStore> {
    store: S,
}

impl RegistryManager<PlatformStore> {
    /// Bound to the current user's hive.
    pub fn new() -> Self {
        Self {
            store: repositories::current_user(),
        }
    }
}

impl<S: RegistryStore> RegistryManager<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn write_string_to_registry(&self, key_path: &str, value_name: &str, data: &str) -> bool {
        match self.store.write_string(key_path, value_name, data) {
            Ok(()) => {
                info!(
                    "Successfully wrote to registry: {}",
                    value_location(key_path, value_name)
                );
                true
            }
            Err(e) => {
                log_failure(&e);
                false
            }
        }
    }

    /// On failure the text is empty.
    pub fn read_string_from_registry(&self, key_path: &str, value_name: &str) -> (bool, String) {
        match self.store.read_string(key_path, value_name) {
            Ok(text) => (true, text),
            Err(e) => {
                log_failure(&e);
                (false, String::new())
            }
        }
    }

    pub fn write_dword_to_registry(&self, key_path: &str, value_name: &str, data: u32) -> bool {
        match self.store.write_dword(key_path, value_name, data) {
            Ok(()) => true,
            Err(e) => {
                log_failure(&e);
                false
            }
        }
    }

    /// On failure the number is 0.
    pub fn read_dword_from_registry(&self, key_path: &str, value_name: &str) -> (bool, u32) {
        match self.store.read_dword(key_path, value_name) {
            Ok(data) => (true, data),
            Err(e) => {
                log_failure(&e);
                (false, 0)
            }
        }
    }
}

/// Nothing stored is a warning; everything else is an error.
fn failure_level(e: &RegistryError) -> Level {
    match e.kind() {
        ErrorKind::NotFound | ErrorKind::EmptyValue => Level::WARN,
        _ => Level::ERROR,
    }
}

fn log_failure(e: &RegistryError) {
    if failure_level(e) == Level::WARN {
        warn!(kind = ?e.kind(), "{}", e);
    } else {
        error!(kind = ?e.kind(), "{}", e);
    }
}
