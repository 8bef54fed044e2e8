//! Persisted session storage seam.
//!
//! The store reads and writes through [`KeyValueStore`] only; the file-backed
//! implementation lives in the infrastructure crate.

mod memory;
mod repository;

pub use memory::InMemoryKeyValueStore;
pub use repository::{CURRENT_USER_KEY, IS_LOGGED_IN_KEY, KeyValueStore};
