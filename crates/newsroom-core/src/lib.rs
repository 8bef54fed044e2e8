//! Domain layer of the newsroom workspace: session and dashboard state, the
//! persistence and authentication seams, and sidebar navigation.

pub mod auth;
pub mod config;
pub mod error;
pub mod navigation;
pub mod state;
pub mod storage;
pub mod user;

// Re-export common types
pub use error::{Result, WorkspaceError};
pub use state::{AppStore, BootstrapOutcome, StoreSnapshot};
