//! Typed registry payloads and the byte codec shared by every store.

use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Value Types
// =============================================================================

/// Type tag stored next to a value's bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// `REG_SZ`
    String,
    /// `REG_EXPAND_SZ`
    ExpandString,
    /// `REG_MULTI_SZ`
    MultiString,
    /// `REG_DWORD`
    Dword,
    /// `REG_QWORD`
    Qword,
    /// `REG_BINARY`
    Binary,
    Other,
}

impl ValueKind {
    pub fn is_text(self) -> bool {
        matches!(self, Self::String | Self::ExpandString)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "REG_SZ",
            Self::ExpandString => "REG_EXPAND_SZ",
            Self::MultiString => "REG_MULTI_SZ",
            Self::Dword => "REG_DWORD",
            Self::Qword => "REG_QWORD",
            Self::Binary => "REG_BINARY",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// A value exactly as the store holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawValue {
    pub kind: ValueKind,
    pub bytes: Vec<u8>,
}

impl RawValue {
    pub fn new(kind: ValueKind, bytes: Vec<u8>) -> Self {
        Self { kind, bytes }
    }

    /// NUL-terminated UTF-16LE, as `REG_SZ` is laid out.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `text` has an interior NUL, which would cut
    /// the value short when read back.
    pub fn string(text: &str) -> Result<Self> {
        validate_string_data(text)?;
        let bytes = text
            .encode_utf16()
            .chain(std::iter::once(0))
            .flat_map(u16::to_le_bytes)
            .collect();
        Ok(Self::new(ValueKind::String, bytes))
    }

    pub fn dword(data: u32) -> Self {
        Self::new(ValueKind::Dword, data.to_le_bytes().to_vec())
    }

    /// # Errors
    ///
    /// `EmptyValue` for zero-length data, `TypeMismatch` unless tagged
    /// `REG_SZ`/`REG_EXPAND_SZ`, `ReadFailed` for malformed UTF-16.
    pub fn to_text(&self, location: &str) -> Result<String> {
        if self.bytes.is_empty() {
            return Err(RegistryError::EmptyValue(location.to_string()));
        }
        if !self.kind.is_text() {
            return Err(RegistryError::TypeMismatch(format!(
                "{}: expected REG_SZ, found {}",
                location, self.kind
            )));
        }

        // An odd trailing byte cannot form a code unit and is dropped.
        let units: Vec<u16> = self
            .bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .take_while(|&unit| unit != 0)
            .collect();

        String::from_utf16(&units)
            .map_err(|e| RegistryError::ReadFailed(format!("{}: {}", location, e)))
    }

    /// # Errors
    ///
    /// `TypeMismatch` unless tagged `REG_DWORD` (checked first, so an empty
    /// value of another type is still a mismatch), `EmptyValue` for
    /// zero-length data, `ReadFailed` when the payload is not 4 bytes.
    pub fn to_dword(&self, location: &str) -> Result<u32> {
        if self.kind != ValueKind::Dword {
            return Err(RegistryError::TypeMismatch(format!(
                "{}: expected REG_DWORD, found {}",
                location, self.kind
            )));
        }
        if self.bytes.is_empty() {
            return Err(RegistryError::EmptyValue(location.to_string()));
        }

        let bytes: [u8; 4] = self.bytes.as_slice().try_into().map_err(|_| {
            RegistryError::ReadFailed(format!(
                "{}: REG_DWORD holds {} bytes",
                location,
                self.bytes.len()
            ))
        })?;
        Ok(u32::from_le_bytes(bytes))
    }
}

pub fn validate_string_data(text: &str) -> Result<()> {
    if text.contains('\0') {
        return Err(RegistryError::InvalidInput(
            "string data contains an interior NUL".to_string(),
        ));
    }
    Ok(())
}
