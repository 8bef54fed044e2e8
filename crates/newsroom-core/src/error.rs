//! Error types for the newsroom workspace.

use thiserror::Error;

/// A shared error type for the workspace core and its adapters.
///
/// Store operations themselves are total; this type surfaces from the
/// storage, configuration and path layers that sit underneath the store.
#[derive(Error, Debug, Clone)]
pub enum WorkspaceError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Persistent key-value storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Persisted session entries exist but cannot be restored.
    ///
    /// Recovered locally by bootstrap; never returned from a store operation.
    #[error("Persisted state corrupt: {0}")]
    PersistedStateCorrupt(String),
}

impl WorkspaceError {
    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a PersistedStateCorrupt error
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::PersistedStateCorrupt(message.into())
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::PersistedStateCorrupt(_))
    }
}

impl From<std::io::Error> for WorkspaceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for WorkspaceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for WorkspaceError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for WorkspaceError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, WorkspaceError>`.
pub type Result<T> = std::result::Result<T, WorkspaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let converted: WorkspaceError = err.into();
        assert!(converted.is_serialization());
        assert!(converted.to_string().starts_with("Serialization error: JSON"));
    }

    #[test]
    fn test_io_error_conversion() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let converted: WorkspaceError = err.into();
        assert!(converted.is_io());
    }

    #[test]
    fn test_corrupt_helper() {
        let err = WorkspaceError::corrupt("bad profile");
        assert!(err.is_corrupt());
        assert_eq!(err.to_string(), "Persisted state corrupt: bad profile");
    }
}
