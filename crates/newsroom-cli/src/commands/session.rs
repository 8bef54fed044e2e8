use anyhow::{Context, Result};
use newsroom_application::WorkspaceService;
use newsroom_core::auth::Credentials;
use newsroom_core::config::RootConfig;
use newsroom_infrastructure::WorkspacePaths;
use serde_json::json;

use super::{bootstrapped, print_json};

pub async fn status(paths: &WorkspacePaths, config: &RootConfig) -> Result<()> {
    let service = WorkspaceService::open_with_config(paths, config)
        .context("Failed to open workspace")?;
    let outcome = service.bootstrap().await;
    let snapshot = service.snapshot().await;

    print_json(&json!({
        "bootstrap": outcome,
        "state": snapshot,
    }))
}

pub async fn login(
    paths: &WorkspacePaths,
    config: &RootConfig,
    username: String,
    password: String,
) -> Result<()> {
    let service = bootstrapped(paths, config).await?;
    let credentials = Credentials::new(username, password);

    let profile = service
        .login(&credentials)
        .await
        .with_context(|| format!("Login failed for '{}'", credentials.username))?;
    print_json(&profile)
}

pub async fn logout(paths: &WorkspacePaths, config: &RootConfig) -> Result<()> {
    let service = bootstrapped(paths, config).await?;
    service.logout().await;

    let snapshot = service.snapshot().await;
    print_json(&json!({ "isAuthenticated": snapshot.is_authenticated }))
}
