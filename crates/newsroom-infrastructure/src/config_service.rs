//! Loads and caches `RootConfig` from `config.toml`.

use std::sync::{Arc, RwLock};

use newsroom_core::config::RootConfig;
use newsroom_core::error::{Result, WorkspaceError};

use crate::paths::WorkspacePaths;
use crate::storage::{AtomicTomlError, AtomicTomlFile};

/// Configuration service that loads the root configuration once and caches it.
///
/// A missing config file is created with defaults on first load.
#[derive(Debug, Clone)]
pub struct ConfigService {
    paths: WorkspacePaths,
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    pub fn new(paths: WorkspacePaths) -> Self {
        Self {
            paths,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the cached config, loading it from disk on first access.
    pub fn get_config(&self) -> Result<RootConfig> {
        if let Ok(read_lock) = self.config.read() {
            if let Some(cached) = read_lock.as_ref() {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load_config()?;

        match self.config.write() {
            Ok(mut write_lock) => *write_lock = Some(loaded.clone()),
            Err(e) => tracing::warn!("[Config] Cache lock poisoned, not caching: {}", e),
        }
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    fn load_config(&self) -> Result<RootConfig> {
        let path = self
            .paths
            .config_file()
            .map_err(|e| WorkspaceError::config(e.to_string()))?;
        let file = AtomicTomlFile::<RootConfig>::new(path);

        match file.load().map_err(config_error)? {
            Some(config) => {
                tracing::debug!("[Config] Loaded {}", file.path().display());
                Ok(config)
            }
            None => {
                let config = RootConfig::default();
                file.save(&config).map_err(config_error)?;
                tracing::info!("[Config] Wrote default config to {}", file.path().display());
                Ok(config)
            }
        }
    }
}

fn config_error(err: AtomicTomlError) -> WorkspaceError {
    WorkspaceError::config(err.to_string())
}
