//! Path management for the newsroom configuration directory.
//!
//! ```text
//! ~/.config/newsroom/     # config root (or the override passed in)
//! ├── config.toml         # RootConfig
//! └── session.toml        # persisted session entries
//! ```

use std::path::PathBuf;
use thiserror::Error;

pub const APP_DIR_NAME: &str = "newsroom";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const SESSION_FILE_NAME: &str = "session.toml";

#[derive(Debug, Error)]
pub enum PathError {
    #[error("Cannot find the user config directory")]
    ConfigDirNotFound,
}

/// Resolves every file location from one root directory.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    root_override: Option<PathBuf>,
}

impl WorkspacePaths {
    /// `root_override` replaces the platform config directory when set.
    pub fn new(root_override: Option<PathBuf>) -> Self {
        Self { root_override }
    }

    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.root_override {
            Some(root) => Ok(root.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }

    pub fn session_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(SESSION_FILE_NAME))
    }
}

impl Default for WorkspacePaths {
    fn default() -> Self {
        Self::new(None)
    }
}
