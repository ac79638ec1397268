//! Typed operations on the current user's hive.

use crate::{error::Result, repositories, store::RegistryStore};

/// Write a string value under `HKEY_CURRENT_USER\<key_path>`
///
/// # Errors
///
/// Returns error if the key cannot be opened/created or the value cannot be written
pub fn write_string(key_path: &str, value_name: &str, data: &str) -> Result {
    repositories::current_user().write_string(key_path, value_name, data)
}

/// Read a string value from `HKEY_CURRENT_USER\<key_path>`
///
/// # Errors
///
/// Returns error if the key or value is missing, the value is empty or not a
/// string, or the registry cannot be read
pub fn read_string(key_path: &str, value_name: &str) -> Result<String> {
    repositories::current_user().read_string(key_path, value_name)
}

/// Write a DWORD value under `HKEY_CURRENT_USER\<key_path>`
///
/// # Errors
///
/// Returns error if the key cannot be opened/created or the value cannot be written
pub fn write_dword(key_path: &str, value_name: &str, data: u32) -> Result {
    repositories::current_user().write_dword(key_path, value_name, data)
}

/// Read a DWORD value from `HKEY_CURRENT_USER\<key_path>`
///
/// # Errors
///
/// Returns error if the key or value is missing, the value is not a DWORD,
/// or the registry cannot be read
pub fn read_dword(key_path: &str, value_name: &str) -> Result<u32> {
    repositories::current_user().read_dword(key_path, value_name)
}
