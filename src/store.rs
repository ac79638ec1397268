//! The narrow interface every registry backend implements.

use crate::domain::{value_location, RawValue};
use crate::error::Result;

/// One open/operate/close sequence per call. Implementations never keep key
/// handles between calls.
pub trait RegistryStore {
    /// Stores `data` as a `REG_SZ` value, creating the key when missing.
    ///
    /// # Errors
    ///
    /// Returns error if the key cannot be opened or created, or the value
    /// cannot be written.
    fn write_string(&self, key_path: &str, value_name: &str, data: &str) -> Result;

    /// Stores `data` as a `REG_DWORD` value, creating the key when missing.
    ///
    /// # Errors
    ///
    /// Returns error if the key cannot be opened or created, or the value
    /// cannot be written.
    fn write_dword(&self, key_path: &str, value_name: &str, data: u32) -> Result;

    /// Fetches a value's type tag and bytes. Never creates the key.
    ///
    /// # Errors
    ///
    /// `KeyNotFound` / `ValueNotFound` when nothing is stored, otherwise the
    /// platform failure.
    fn read_value(&self, key_path: &str, value_name: &str) -> Result<RawValue>;

    /// # Errors
    ///
    /// Everything `read_value` reports, plus `EmptyValue` and `TypeMismatch`.
    fn read_string(&self, key_path: &str, value_name: &str) -> Result<String> {
        self.read_value(key_path, value_name)?
            .to_text(&value_location(key_path, value_name))
    }

    /// # Errors
    ///
    /// Everything `read_value` reports, plus `EmptyValue` and `TypeMismatch`.
    fn read_dword(&self, key_path: &str, value_name: &str) -> Result<u32> {
        self.read_value(key_path, value_name)?
            .to_dword(&value_location(key_path, value_name))
    }
}

impl<S: RegistryStore + ?Sized> RegistryStore for &S {
    fn write_string(&self, key_path: &str, value_name: &str, data: &str) -> Result {
        (**self).write_string(key_path, value_name, data)
    }

    fn write_dword(&self, key_path: &str, value_name: &str, data: u32) -> Result {
        (**self).write_dword(key_path, value_name, data)
    }

    fn read_value(&self, key_path: &str, value_name: &str) -> Result<RawValue> {
        (**self).read_value(key_path, value_name)
    }
}
