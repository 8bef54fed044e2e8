//! Application layer for the newsroom workspace.
//!
//! Coordinates the domain store with the file-backed infrastructure and
//! exposes it to async callers.

pub mod workspace_service;

pub use workspace_service::WorkspaceService;
