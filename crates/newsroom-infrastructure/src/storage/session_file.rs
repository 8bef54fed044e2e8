//! File-backed [`KeyValueStore`] holding the persisted session entries.

use std::collections::BTreeMap;
use std::path::PathBuf;

use newsroom_core::error::{Result, WorkspaceError};
use newsroom_core::storage::KeyValueStore;

use super::atomic_toml::{AtomicTomlError, AtomicTomlFile};

type Entries = BTreeMap<String, String>;

/// Flat string table stored as a single TOML document (`session.toml`).
pub struct FileKeyValueStore {
    file: AtomicTomlFile<Entries>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }

    fn load(&self) -> Result<Entries> {
        Ok(self.file.load().map_err(into_workspace_error)?.unwrap_or_default())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        tracing::debug!("[SessionFile] set {}", key);
        self.file
            .update_or_reset(Entries::new(), |entries| {
                entries.insert(key.to_string(), value.to_string());
            })
            .map_err(into_workspace_error)
    }

    fn remove(&self, key: &str) -> Result<()> {
        // Writing back an empty table is pointless when nothing is stored yet.
        if !self.file.path().exists() {
            return Ok(());
        }
        tracing::debug!("[SessionFile] remove {}", key);
        self.file
            .update_or_reset(Entries::new(), |entries| {
                entries.remove(key);
            })
            .map_err(into_workspace_error)
    }
}

fn into_workspace_error(err: AtomicTomlError) -> WorkspaceError {
    match err {
        AtomicTomlError::Io(e) => e.into(),
        e @ AtomicTomlError::Parse { .. } => WorkspaceError::corrupt(e.to_string()),
        e => WorkspaceError::storage(e.to_string()),
    }
}
