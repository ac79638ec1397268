pub mod memory;
#[cfg(windows)]
pub mod registry;
pub mod unsupported;

pub use memory::MemoryStore;
#[cfg(windows)]
pub use registry::WindowsRegistry;
pub use unsupported::UnsupportedStore;

/// The native store for the host this crate was compiled for.
#[cfg(windows)]
pub type PlatformStore = WindowsRegistry;

/// The native store for the host this crate was compiled for.
#[cfg(not(windows))]
pub type PlatformStore = UnsupportedStore;

/// The current user's hive on the native store.
pub fn current_user() -> PlatformStore {
    PlatformStore::current_user()
}
