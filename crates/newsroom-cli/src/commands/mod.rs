pub mod navigation;
pub mod notifications;
pub mod session;

use anyhow::{Context, Result};
use newsroom_application::WorkspaceService;
use newsroom_core::config::RootConfig;
use newsroom_infrastructure::WorkspacePaths;
use serde::Serialize;

/// Opens the file-backed workspace and runs bootstrap.
pub(crate) async fn bootstrapped(
    paths: &WorkspacePaths,
    config: &RootConfig,
) -> Result<WorkspaceService> {
    let service = WorkspaceService::open_with_config(paths, config)
        .context("Failed to open workspace")?;
    let outcome = service.bootstrap().await;
    tracing::info!("[Bootstrap] {:?}", outcome);
    Ok(service)
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
