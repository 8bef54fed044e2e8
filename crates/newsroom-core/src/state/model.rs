//! Dashboard state models held by the store.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::state::activity::ActivityLogEntry;
use crate::state::notification::Notification;
use crate::user::UserProfile;

/// Colour scheme of the workspace shell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Overall health indicator shown on the dashboard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SystemStatus {
    #[default]
    Normal,
    Warning,
    Error,
}

/// Snapshot of the dashboard counters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub today_articles: u32,
    pub pending_reviews: u32,
    pub media_assets: u32,
    pub total_views: u64,
    pub online_users: u32,
    pub system_status: SystemStatus,
}

/// Partial update for [`Statistics`]; `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today_articles: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_reviews: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_assets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_views: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_users: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_status: Option<SystemStatus>,
}

impl Statistics {
    /// Shallow-merges every `Some` field of `update` into `self`.
    pub fn apply(&mut self, update: StatisticsUpdate) {
        if let Some(v) = update.today_articles {
            self.today_articles = v;
        }
        if let Some(v) = update.pending_reviews {
            self.pending_reviews = v;
        }
        if let Some(v) = update.media_assets {
            self.media_assets = v;
        }
        if let Some(v) = update.total_views {
            self.total_views = v;
        }
        if let Some(v) = update.online_users {
            self.online_users = v;
        }
        if let Some(v) = update.system_status {
            self.system_status = v;
        }
    }
}

/// Per-tab UI preferences. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiPreferences {
    pub sidebar_collapsed: bool,
    pub theme: Theme,
}

/// Read-only copy of every consumer-visible store field.
///
/// This is what page consumers render from and what the application layer
/// publishes after each mutation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub is_authenticated: bool,
    pub user: Option<UserProfile>,
    pub statistics: Statistics,
    pub recent_activities: Vec<ActivityLogEntry>,
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
    pub sidebar_collapsed: bool,
    pub theme: Theme,
    pub loading: bool,
}
