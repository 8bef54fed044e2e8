//! Notification inbox with a maintained unread counter.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub timestamp: String,
    pub read: bool,
}

/// A notification as submitted by a producer; id, timestamp and read flag
/// are assigned by the inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNotification {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
}

impl NewNotification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Newest-first notification sequence.
///
/// `unread_count` always equals the number of entries with `read == false`.
/// Both fields are private so every transition goes through a method that
/// updates them together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationInbox {
    notifications: Vec<Notification>,
    unread_count: usize,
}

impl NotificationInbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an inbox from newest-first notifications, deriving the counter.
    pub fn from_notifications(notifications: Vec<Notification>) -> Self {
        let unread_count = notifications.iter().filter(|n| !n.read).count();
        Self {
            notifications,
            unread_count,
        }
    }

    /// Stamps `notification` with a fresh id and the current time, then prepends it.
    pub fn push(&mut self, notification: NewNotification) -> &Notification {
        let entry = Notification {
            id: Uuid::new_v4().to_string(),
            kind: notification.kind,
            title: notification.title,
            body: notification.body,
            timestamp: chrono::Utc::now().to_rfc3339(),
            read: false,
        };
        self.notifications.insert(0, entry);
        self.unread_count += 1;
        self.debug_check();
        &self.notifications[0]
    }

    /// Marks one notification read.
    ///
    /// Returns `false` without changing anything when the id is unknown or
    /// the notification was already read.
    pub fn mark_read(&mut self, id: &str) -> bool {
        let Some(notification) = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id && !n.read)
        else {
            return false;
        };
        notification.read = true;
        self.unread_count -= 1;
        self.debug_check();
        true
    }

    /// Marks every notification read and returns how many changed.
    pub fn mark_all_read(&mut self) -> usize {
        let changed = self.unread_count;
        for notification in &mut self.notifications {
            notification.read = true;
        }
        self.unread_count = 0;
        changed
    }

    pub fn unread_count(&self) -> usize {
        self.unread_count
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn as_slice(&self) -> &[Notification] {
        &self.notifications
    }

    fn debug_check(&self) {
        debug_assert_eq!(
            self.unread_count,
            self.notifications.iter().filter(|n| !n.read).count(),
            "unread counter diverged from inbox"
        );
    }
}
