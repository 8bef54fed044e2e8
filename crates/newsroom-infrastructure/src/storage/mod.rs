//! Storage layer for atomic file operations.

mod atomic_toml;
mod session_file;

pub use atomic_toml::{AtomicTomlError, AtomicTomlFile};
pub use session_file::FileKeyValueStore;
