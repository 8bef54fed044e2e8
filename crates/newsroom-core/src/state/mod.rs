//! Application state: the store and the models it owns.

pub mod activity;
pub mod model;
pub mod notification;
pub mod seed;
pub mod session;
pub mod store;

pub use activity::{
    ActivityKind, ActivityLog, ActivityLogEntry, ActivityOutcome, NewActivity,
    RECENT_ACTIVITY_LIMIT,
};
pub use model::{
    Statistics, StatisticsUpdate, StoreSnapshot, SystemStatus, Theme, UiPreferences,
};
pub use notification::{NewNotification, Notification, NotificationInbox, NotificationKind};
pub use session::Session;
pub use store::{AppStore, BootstrapOutcome};
