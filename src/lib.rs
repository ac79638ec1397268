pub mod bridge;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod service;
pub mod store;

// Public, stable-ish API surface for consumers (hosts / other crates)

pub use crate::service::{read_dword, read_string, write_dword, write_string};

pub use crate::bridge::RegistryManager;

pub use crate::domain::{Access, KeyPath, RawValue, ValueKind};

pub use crate::error::{ErrorKind, ErrorReport, RegistryError, Result};

pub use crate::repositories::{current_user, MemoryStore, PlatformStore, UnsupportedStore};

#[cfg(windows)]
pub use crate::repositories::{
    registry::{open_key, Hive},
    WindowsRegistry,
};

pub use crate::store::RegistryStore;

pub mod prelude {
    pub use crate::bridge::RegistryManager;
    pub use crate::error::{ErrorKind, RegistryError, Result};
    pub use crate::repositories::{current_user, MemoryStore, PlatformStore};
    pub use crate::service::{read_dword, read_string, write_dword, write_string};
    pub use crate::store::RegistryStore;
}
