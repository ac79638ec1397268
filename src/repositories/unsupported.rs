//! Stand-in for hosts without a registry.

use crate::domain::RawValue;
use crate::error::{RegistryError, Result};
use crate::store::RegistryStore;
use tracing::debug;

/// Every operation fails with `RegistryError::Unsupported`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedStore;

impl UnsupportedStore {
    pub fn current_user() -> Self {
        Self
    }
}

impl RegistryStore for UnsupportedStore {
    fn write_string(&self, key_path: &str, value_name: &str, _data: &str) -> Result {
        debug!(key = key_path, value = value_name, "registry unavailable");
        Err(RegistryError::Unsupported)
    }

    fn write_dword(&self, key_path: &str, value_name: &str, _data: u32) -> Result {
        debug!(key = key_path, value = value_name, "registry unavailable");
        Err(RegistryError::Unsupported)
    }

    fn read_value(&self, key_path: &str, value_name: &str) -> Result<RawValue> {
        debug!(key = key_path, value = value_name, "registry unavailable");
        Err(RegistryError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operation_is_unsupported() {
        let store = UnsupportedStore;
        assert_eq!(
            store.write_string("Software", "Name", "x"),
            Err(RegistryError::Unsupported)
        );
        assert_eq!(
            store.write_dword("Software", "Level", 1),
            Err(RegistryError::Unsupported)
        );
        assert_eq!(
            store.read_string("Software", "Name"),
            Err(RegistryError::Unsupported)
        );
        assert_eq!(
            store.read_dword("Software", "Level"),
            Err(RegistryError::Unsupported)
        );
    }
}
