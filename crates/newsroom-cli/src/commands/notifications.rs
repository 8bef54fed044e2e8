//! Inbox commands. The inbox is in-memory, so each invocation works on the
//! freshly bootstrapped dataset.

use anyhow::Result;
use newsroom_core::config::RootConfig;
use newsroom_infrastructure::WorkspacePaths;
use serde_json::json;

use super::{bootstrapped, print_json};

pub async fn list(paths: &WorkspacePaths, config: &RootConfig) -> Result<()> {
    let snapshot = bootstrapped(paths, config).await?.snapshot().await;
    print_json(&json!({
        "unreadCount": snapshot.unread_count,
        "notifications": snapshot.notifications,
    }))
}

pub async fn read(paths: &WorkspacePaths, config: &RootConfig, id: &str) -> Result<()> {
    let service = bootstrapped(paths, config).await?;
    let changed = service.mark_notification_read(id).await;
    if !changed {
        tracing::info!("[Inbox] Notification '{}' missing or already read", id);
    }

    let snapshot = service.snapshot().await;
    print_json(&json!({
        "changed": changed,
        "unreadCount": snapshot.unread_count,
    }))
}

pub async fn read_all(paths: &WorkspacePaths, config: &RootConfig) -> Result<()> {
    let service = bootstrapped(paths, config).await?;
    let marked = service.mark_all_notifications_read().await;
    print_json(&json!({
        "marked": marked,
        "unreadCount": service.snapshot().await.unread_count,
    }))
}
