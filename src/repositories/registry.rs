//! Registry access - thin wrapper over winreg.

use crate::domain::{
    validate_string_data, validate_value_name, value_location, Access, KeyPath, RawValue,
    ValueKind,
};
use crate::error::{RegistryError, Result};
use crate::store::RegistryStore;
use tracing::debug;
use winreg::{enums::*, RegKey, RegValue, HKEY};

fn access_mask(access: Access) -> u32 {
    match access {
        Access::Read => KEY_READ,
        Access::Write => KEY_WRITE,
    }
}

/// Opens `key_path` below `root` with the requested rights. For
/// `Access::Write` a missing key is created as a non-volatile key; for
/// `Access::Read` it is reported as `KeyNotFound`.
///
/// # Errors
///
/// Returns error if the path is invalid, access is denied, or the key
/// neither opens nor can be created.
pub fn open_key(root: HKEY, key_path: &str, access: Access) -> Result<RegKey> {
    let path = KeyPath::parse(key_path)?;
    let predef = RegKey::predef(root);
    let mask = access_mask(access);

    match predef.open_subkey_with_flags(path.as_str(), mask) {
        Ok(key) => Ok(key),
        Err(open_err) if access.creates_missing() => {
            debug!(key = %path, error = %open_err, "open failed, creating key");
            predef
                .create_subkey_with_flags(path.as_str(), mask)
                .map(|(key, _)| key)
                .map_err(|e| RegistryError::open_failed(path.as_str(), &e))
        }
        Err(open_err) => Err(RegistryError::open_failed(path.as_str(), &open_err)),
    }
}

fn kind_of(value: &RegValue) -> ValueKind {
    match value.vtype {
        REG_SZ => ValueKind::String,
        REG_EXPAND_SZ => ValueKind::ExpandString,
        REG_MULTI_SZ => ValueKind::MultiString,
        REG_DWORD => ValueKind::Dword,
        REG_QWORD => ValueKind::Qword,
        REG_BINARY => ValueKind::Binary,
        _ => ValueKind::Other,
    }
}

/// Predefined root a `WindowsRegistry` operates under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hive {
    CurrentUser,
}

impl Hive {
    pub fn handle(self) -> HKEY {
        match self {
            Self::CurrentUser => HKEY_CURRENT_USER,
        }
    }
}

/// The native registry below one predefined root key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowsRegistry {
    hive: Hive,
}

impl WindowsRegistry {
    pub fn current_user() -> Self {
        Self {
            hive: Hive::CurrentUser,
        }
    }

    pub fn hive(&self) -> Hive {
        self.hive
    }
}

impl Default for WindowsRegistry {
    fn default() -> Self {
        Self::current_user()
    }
}

impl RegistryStore for WindowsRegistry {
    fn write_string(&self, key_path: &str, value_name: &str, data: &str) -> Result {
        validate_value_name(value_name)?;
        validate_string_data(data)?;
        let key = open_key(self.hive.handle(), key_path, Access::Write)?;
        let location = value_location(key_path, value_name);

        debug!(value = %location, "writing REG_SZ");
        key.set_value(value_name, &data)
            .map_err(|e| RegistryError::write_failed(&location, &e))
    }

    fn write_dword(&self, key_path: &str, value_name: &str, data: u32) -> Result {
        validate_value_name(value_name)?;
        let key = open_key(self.hive.handle(), key_path, Access::Write)?;
        let location = value_location(key_path, value_name);

        debug!(value = %location, data, "writing REG_DWORD");
        key.set_value(value_name, &data)
            .map_err(|e| RegistryError::write_failed(&location, &e))
    }

    fn read_value(&self, key_path: &str, value_name: &str) -> Result<RawValue> {
        validate_value_name(value_name)?;
        let key = open_key(self.hive.handle(), key_path, Access::Read)?;
        let location = value_location(key_path, value_name);

        let value = key
            .get_raw_value(value_name)
            .map_err(|e| RegistryError::read_failed(&location, &e))?;
        let kind = kind_of(&value);
        debug!(value = %location, %kind, len = value.bytes.len(), "read value");

        Ok(RawValue::new(kind, value.bytes.to_vec()))
    }
}
