//! Bounded recent-activity log.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Maximum number of entries the log retains.
pub const RECENT_ACTIVITY_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ActivityKind {
    Create,
    Edit,
    Review,
    Publish,
    Upload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ActivityOutcome {
    Success,
    Pending,
    Failed,
}

/// One content action shown in the dashboard feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    pub actor: String,
    pub timestamp: String,
    pub outcome: ActivityOutcome,
}

/// An activity as submitted by a page, before the log assigns its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    pub actor: String,
    pub timestamp: String,
    pub outcome: ActivityOutcome,
}

impl NewActivity {
    /// Builds an activity stamped with the current time.
    pub fn now(
        kind: ActivityKind,
        title: impl Into<String>,
        actor: impl Into<String>,
        outcome: ActivityOutcome,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            actor: actor.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            outcome,
        }
    }

    fn into_entry(self, id: String) -> ActivityLogEntry {
        ActivityLogEntry {
            id,
            kind: self.kind,
            title: self.title,
            actor: self.actor,
            timestamp: self.timestamp,
            outcome: self.outcome,
        }
    }
}

/// Most-recent-first sequence capped at [`RECENT_ACTIVITY_LIMIT`].
///
/// Inserting past the cap evicts from the tail. Entries are never removed
/// individually.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLog {
    entries: VecDeque<ActivityLogEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a log from newest-first entries, keeping at most the limit.
    pub fn from_entries(entries: impl IntoIterator<Item = ActivityLogEntry>) -> Self {
        let entries = entries.into_iter().take(RECENT_ACTIVITY_LIMIT).collect();
        Self { entries }
    }

    /// Assigns a fresh id, prepends the entry and evicts the oldest past the cap.
    pub fn record(&mut self, activity: NewActivity) -> &ActivityLogEntry {
        let entry = activity.into_entry(Uuid::new_v4().to_string());
        self.entries.push_front(entry);
        self.entries.truncate(RECENT_ACTIVITY_LIMIT);
        &self.entries[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActivityLogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_vec(&self) -> Vec<ActivityLogEntry> {
        self.entries.iter().cloned().collect()
    }
}
