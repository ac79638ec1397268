use serde::{Deserialize, Serialize};
#[cfg(any(windows, test))]
use std::io;
use thiserror::Error;

pub type Result<T = (), E = RegistryError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Registry key not found: {0}")]
    KeyNotFound(String),

    #[error("Registry value not found: {0}")]
    ValueNotFound(String),

    #[error("Registry value is empty: {0}")]
    EmptyValue(String),

    #[error("Registry value has unexpected type: {0}")]
    TypeMismatch(String),

    #[error("Access to registry denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid registry input: {0}")]
    InvalidInput(String),

    #[error("Failed to open/create registry key: {0}")]
    KeyOpenFailed(String),

    #[error("Failed to read registry value: {0}")]
    ReadFailed(String),

    #[error("Failed to write registry value: {0}")]
    WriteFailed(String),

    #[error("Registry is not available on this platform")]
    Unsupported,
}

/// Coarse classification a calling layer can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    EmptyValue,
    TypeMismatch,
    PermissionDenied,
    InvalidInput,
    Io,
    Unsupported,
}

/// Serializable form of an error for hosts that exchange JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

impl RegistryError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::KeyNotFound(_) | Self::ValueNotFound(_) => ErrorKind::NotFound,
            Self::EmptyValue(_) => ErrorKind::EmptyValue,
            Self::TypeMismatch(_) => ErrorKind::TypeMismatch,
            Self::PermissionDenied(_) => ErrorKind::PermissionDenied,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::KeyOpenFailed(_) | Self::ReadFailed(_) | Self::WriteFailed(_) => ErrorKind::Io,
            Self::Unsupported => ErrorKind::Unsupported,
        }
    }

    /// Whether repeating the same call could succeed without the caller
    /// changing anything.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        self.kind() == ErrorKind::Io
    }

    /// Absent key, absent value and zero-length value are all "nothing stored".
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotFound | ErrorKind::EmptyValue)
    }

    #[must_use]
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind(),
            message: self.to_string(),
        }
    }

    #[cfg(any(windows, test))]
    pub(crate) fn open_failed(key_path: &str, err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::KeyNotFound(key_path.to_string()),
            io::ErrorKind::PermissionDenied => {
                Self::PermissionDenied(format!("{}: {}", key_path, err))
            }
            io::ErrorKind::InvalidInput => Self::InvalidInput(format!("{}: {}", key_path, err)),
            _ => Self::KeyOpenFailed(format!("{}: {}", key_path, err)),
        }
    }

    #[cfg(any(windows, test))]
    pub(crate) fn read_failed(location: &str, err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::ValueNotFound(location.to_string()),
            io::ErrorKind::PermissionDenied => {
                Self::PermissionDenied(format!("{}: {}", location, err))
            }
            _ => Self::ReadFailed(format!("{}: {}", location, err)),
        }
    }

    #[cfg(any(windows, test))]
    pub(crate) fn write_failed(location: &str, err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => {
                Self::PermissionDenied(format!("{}: {}", location, err))
            }
            io::ErrorKind::InvalidInput => Self::InvalidInput(format!("{}: {}", location, err)),
            _ => Self::WriteFailed(format!("{}: {}", location, err)),
        }
    }
}
