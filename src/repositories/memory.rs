//! In-process registry emulation.
//!
//! Mirrors the behavior of the native store closely enough to exercise the
//! store contract on any platform: key and value names compare
//! case-insensitively, writing a value creates every missing ancestor key,
//! and reads never create anything. Nothing is persisted.

use crate::domain::{validate_value_name, value_location, Access, KeyPath, RawValue};
use crate::error::{RegistryError, Result};
use crate::store::RegistryStore;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

#[derive(Debug, Default)]
struct KeyNode {
    /// Folded name -> (name as first written, value).
    values: BTreeMap<String, (String, RawValue)>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    keys: RwLock<BTreeMap<String, KeyNode>>,
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_exists(&self, key_path: &str) -> bool {
        self.keys
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&fold(key_path))
    }

    /// Stores an arbitrary typed payload, e.g. to seed values the typed
    /// writers never produce.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a malformed key path or value name.
    pub fn insert_raw(&self, key_path: &str, value_name: &str, value: RawValue) -> Result {
        self.set(key_path, value_name, value)
    }

    fn set(&self, key_path: &str, value_name: &str, value: RawValue) -> Result {
        validate_value_name(value_name)?;
        let path = KeyPath::parse(key_path)?;
        let mut keys = self.keys.write().unwrap_or_else(PoisonError::into_inner);

        for ancestor in path.ancestors() {
            keys.entry(fold(&ancestor)).or_default();
        }

        debug!(
            value = %value_location(key_path, value_name),
            kind = %value.kind,
            "storing value"
        );
        let node = keys.entry(fold(path.as_str())).or_default();
        match node.values.get_mut(&fold(value_name)) {
            Some((_, slot)) => *slot = value,
            None => {
                node.values
                    .insert(fold(value_name), (value_name.to_string(), value));
            }
        }
        Ok(())
    }

    fn open(&self, key_path: &str, access: Access) -> Result<String> {
        let path = KeyPath::parse(key_path)?;
        let folded = fold(path.as_str());
        if !access.creates_missing() && !self.key_exists(path.as_str()) {
            return Err(RegistryError::KeyNotFound(path.to_string()));
        }
        Ok(folded)
    }
}

impl RegistryStore for MemoryStore {
    fn write_string(&self, key_path: &str, value_name: &str, data: &str) -> Result {
        self.set(key_path, value_name, RawValue::string(data)?)
    }

    fn write_dword(&self, key_path: &str, value_name: &str, data: u32) -> Result {
        self.set(key_path, value_name, RawValue::dword(data))
    }

    fn read_value(&self, key_path: &str, value_name: &str) -> Result<RawValue> {
        validate_value_name(value_name)?;
        let folded = self.open(key_path, Access::Read)?;
        let keys = self.keys.read().unwrap_or_else(PoisonError::into_inner);

        keys.get(&folded)
            .and_then(|node| node.values.get(&fold(value_name)))
            .map(|(_, value)| value.clone())
            .ok_or_else(|| RegistryError::ValueNotFound(value_location(key_path, value_name)))
    }
}
