//! File-backed adapters for the newsroom workspace.

pub mod config_service;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::paths::{PathError, WorkspacePaths};
pub use crate::storage::{AtomicTomlError, AtomicTomlFile, FileKeyValueStore};
