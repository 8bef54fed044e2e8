//! The application store: single owner of session, dashboard and UI state.

use std::sync::Arc;

use serde::Serialize;

use crate::auth::{AuthError, AuthProvider, Credentials};
use crate::config::RootConfig;
use crate::error::{Result, WorkspaceError};
use crate::state::activity::{ActivityLog, ActivityLogEntry, NewActivity};
use crate::state::model::{Statistics, StatisticsUpdate, StoreSnapshot, Theme, UiPreferences};
use crate::state::notification::{NewNotification, Notification, NotificationInbox};
use crate::state::seed;
use crate::state::session::Session;
use crate::storage::{CURRENT_USER_KEY, IS_LOGGED_IN_KEY, KeyValueStore};
use crate::user::UserProfile;

const LOGGED_IN_VALUE: &str = "true";

/// Which path [`AppStore::bootstrap`] took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BootstrapOutcome {
    /// A persisted session was restored; dashboard data was seeded.
    Restored,
    /// Persisted entries were unreadable and have been cleared.
    Recovered,
    /// Nothing was persisted; the demo dataset was loaded.
    Seeded,
    /// Nothing was persisted and demo seeding is disabled.
    Empty,
}

/// Owns all consumer-visible workspace state.
///
/// Consumers read through accessors or [`AppStore::snapshot`] and mutate only
/// through the operation methods. Every method leaves the session and
/// notification invariants intact when it returns.
pub struct AppStore {
    storage: Arc<dyn KeyValueStore>,
    auth: Arc<dyn AuthProvider>,
    seed_demo_data: bool,
    session: Session,
    statistics: Statistics,
    activities: ActivityLog,
    inbox: NotificationInbox,
    preferences: UiPreferences,
    loading: bool,
}

impl AppStore {
    /// Creates an empty, logged-out store.
    pub fn new(storage: Arc<dyn KeyValueStore>, auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            storage,
            auth,
            seed_demo_data: true,
            session: Session::new(),
            statistics: Statistics::default(),
            activities: ActivityLog::new(),
            inbox: NotificationInbox::new(),
            preferences: UiPreferences::default(),
            loading: false,
        }
    }

    /// Creates a store honouring the seeding and theme settings of `config`.
    pub fn from_config(
        storage: Arc<dyn KeyValueStore>,
        auth: Arc<dyn AuthProvider>,
        config: &RootConfig,
    ) -> Self {
        let mut store = Self::new(storage, auth);
        store.seed_demo_data = config.seed_demo_data;
        store.preferences.theme = config.default_theme;
        store
    }

    pub fn with_demo_seed(mut self, enabled: bool) -> Self {
        self.seed_demo_data = enabled;
        self
    }

    // ============================================================================
    // Session operations
    // ============================================================================

    /// Reconciles persisted session entries with in-memory state.
    ///
    /// Every call resets the dashboard data. Calling it twice in one tab
    /// re-seeds the demo dataset; this mirrors the dashboard's startup hook.
    pub fn bootstrap(&mut self) -> BootstrapOutcome {
        let outcome = match self.read_persisted_session() {
            Ok(Some(user)) => {
                tracing::info!("[Bootstrap] Restored persisted session for user {}", user.id);
                self.session.authenticate(user);
                self.seed_dashboard();
                BootstrapOutcome::Restored
            }
            Ok(None) if self.seed_demo_data => {
                tracing::info!("[Bootstrap] No persisted session, seeding demo data");
                self.session.authenticate(seed::demo_user());
                self.seed_dashboard();
                BootstrapOutcome::Seeded
            }
            Ok(None) => {
                tracing::info!("[Bootstrap] No persisted session, starting logged out");
                self.session.clear();
                self.reset_dashboard();
                BootstrapOutcome::Empty
            }
            Err(e) => {
                tracing::warn!("[Bootstrap] Discarding persisted session: {}", e);
                self.clear_persisted_session();
                self.session.clear();
                self.reset_dashboard();
                BootstrapOutcome::Recovered
            }
        };
        debug_assert!(!self.session.is_authenticated() || self.session.user().is_some());
        outcome
    }

    /// Validates `credentials` and, on success, persists and activates the session.
    ///
    /// A rejected attempt leaves the store untouched.
    pub fn login(
        &mut self,
        credentials: &Credentials,
    ) -> std::result::Result<UserProfile, AuthError> {
        let profile = match self.auth.authenticate(credentials) {
            Ok(profile) => profile,
            Err(e) => {
                tracing::info!("[Store] Login rejected for '{}'", credentials.username);
                return Err(e);
            }
        };

        if let Err(e) = self.persist_session(&profile) {
            tracing::warn!("[Store] Session not persisted: {}", e);
        }
        tracing::info!("[Store] User {} logged in", profile.id);
        self.session.authenticate(profile.clone());
        Ok(profile)
    }

    /// Clears the persisted and in-memory session. Dashboard data is kept.
    pub fn logout(&mut self) {
        self.clear_persisted_session();
        self.session.clear();
        tracing::info!("[Store] Logged out");
    }

    pub fn set_user(&mut self, user: Option<UserProfile>) {
        self.session.set_user(user);
    }

    pub fn set_authenticated(&mut self, authenticated: bool) {
        if !self.session.set_authenticated(authenticated) {
            tracing::warn!("[Store] Ignoring authenticated=true without a user");
        }
    }

    // ============================================================================
    // Dashboard operations
    // ============================================================================

    pub fn update_statistics(&mut self, update: StatisticsUpdate) {
        self.statistics.apply(update);
    }

    pub fn add_activity(&mut self, activity: NewActivity) -> &ActivityLogEntry {
        self.activities.record(activity)
    }

    pub fn add_notification(&mut self, notification: NewNotification) -> &Notification {
        self.inbox.push(notification)
    }

    /// Returns whether anything changed; unknown or already-read ids are a no-op.
    pub fn mark_notification_read(&mut self, id: &str) -> bool {
        self.inbox.mark_read(id)
    }

    pub fn mark_all_notifications_read(&mut self) -> usize {
        self.inbox.mark_all_read()
    }

    // ============================================================================
    // UI operations
    // ============================================================================

    pub fn toggle_sidebar(&mut self) -> bool {
        self.preferences.sidebar_collapsed = !self.preferences.sidebar_collapsed;
        self.preferences.sidebar_collapsed
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.preferences.theme = theme;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    // ============================================================================
    // Read access
    // ============================================================================

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.session.user()
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn activities(&self) -> &ActivityLog {
        &self.activities
    }

    pub fn notifications(&self) -> &NotificationInbox {
        &self.inbox
    }

    pub fn unread_count(&self) -> usize {
        self.inbox.unread_count()
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.preferences.sidebar_collapsed
    }

    pub fn theme(&self) -> Theme {
        self.preferences.theme
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            is_authenticated: self.session.is_authenticated(),
            user: self.session.user().cloned(),
            statistics: self.statistics.clone(),
            recent_activities: self.activities.to_vec(),
            notifications: self.inbox.as_slice().to_vec(),
            unread_count: self.inbox.unread_count(),
            sidebar_collapsed: self.preferences.sidebar_collapsed,
            theme: self.preferences.theme,
            loading: self.loading,
        }
    }

    // ============================================================================
    // Internals
    // ============================================================================

    /// `Ok(None)` unless both entries are present with the flag set to
    /// `"true"`. Stale halves of a pair are dropped. Only an unparsable
    /// profile is reported as corrupt.
    fn read_persisted_session(&self) -> Result<Option<UserProfile>> {
        let flag = self.storage.get(IS_LOGGED_IN_KEY)?;
        let saved_user = self.storage.get(CURRENT_USER_KEY)?;

        match (flag, saved_user) {
            (None, None) => Ok(None),
            (Some(flag), Some(raw)) if flag == LOGGED_IN_VALUE => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| WorkspaceError::corrupt(format!("saved user: {}", e))),
            (flag, user) => {
                tracing::info!(
                    "[Bootstrap] Ignoring incomplete session entries (flag: {:?}, user present: {})",
                    flag,
                    user.is_some()
                );
                self.clear_persisted_session();
                Ok(None)
            }
        }
    }

    fn persist_session(&self, profile: &UserProfile) -> Result<()> {
        let raw = serde_json::to_string(profile)?;
        self.storage.set(CURRENT_USER_KEY, &raw)?;
        self.storage.set(IS_LOGGED_IN_KEY, LOGGED_IN_VALUE)
    }

    fn clear_persisted_session(&self) {
        for key in [IS_LOGGED_IN_KEY, CURRENT_USER_KEY] {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!("[Store] Failed to remove persisted '{}': {}", key, e);
            }
        }
    }

    fn seed_dashboard(&mut self) {
        self.statistics = seed::demo_statistics();
        self.activities = ActivityLog::from_entries(seed::demo_activities());
        self.inbox = NotificationInbox::from_notifications(seed::demo_notifications());
    }

    fn reset_dashboard(&mut self) {
        self.statistics = Statistics::default();
        self.activities = ActivityLog::new();
        self.inbox = NotificationInbox::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::FixedCredentialAuthProvider;
    use crate::state::activity::{ActivityKind, ActivityOutcome, RECENT_ACTIVITY_LIMIT};
    use crate::state::model::SystemStatus;
    use crate::state::notification::NotificationKind;
    use crate::storage::InMemoryKeyValueStore;

    fn store_with(storage: Arc<InMemoryKeyValueStore>) -> AppStore {
        AppStore::new(storage, Arc::new(FixedCredentialAuthProvider::new()))
    }

    fn fresh_store() -> (AppStore, Arc<InMemoryKeyValueStore>) {
        let storage = Arc::new(InMemoryKeyValueStore::new());
        (store_with(storage.clone()), storage)
    }

    fn assert_unread_consistent(store: &AppStore) {
        let counted = store.notifications().iter().filter(|n| !n.read).count();
        assert_eq!(store.unread_count(), counted);
    }

    #[test]
    fn test_new_store_is_logged_out() {
        let (store, _) = fresh_store();
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
        assert_eq!(store.theme(), Theme::Light);
        assert!(!store.sidebar_collapsed());
    }

    #[test]
    fn test_bootstrap_fresh_seeds_demo_data() {
        let (mut store, _) = fresh_store();
        assert_eq!(store.bootstrap(), BootstrapOutcome::Seeded);

        assert!(store.is_authenticated());
        assert_eq!(store.user().unwrap().name, seed::DEMO_USER_NAME);
        assert_eq!(
            store.user().unwrap().avatar_url.as_deref(),
            Some(seed::DEMO_USER_AVATAR_URL)
        );
        assert_eq!(store.notifications().len(), 3);
        assert_eq!(store.unread_count(), 2);
        assert_eq!(store.activities().len(), 5);
        assert_eq!(store.statistics().today_articles, 28);
    }

    #[test]
    fn test_bootstrap_without_seeding() {
        let storage = Arc::new(InMemoryKeyValueStore::new());
        let mut store = store_with(storage).with_demo_seed(false);
        assert_eq!(store.bootstrap(), BootstrapOutcome::Empty);
        assert!(!store.is_authenticated());
        assert!(store.notifications().is_empty());
    }

    #[test]
    fn test_bootstrap_restores_persisted_user() {
        let (mut first, storage) = fresh_store();
        first
            .login(&Credentials::new("admin", "123456"))
            .unwrap();

        let mut second = store_with(storage);
        assert_eq!(second.bootstrap(), BootstrapOutcome::Restored);
        assert!(second.is_authenticated());
        assert_eq!(second.user().unwrap().name, "管理员");
        assert_eq!(second.unread_count(), 2);
    }

    #[test]
    fn test_bootstrap_recovers_from_corrupt_profile() {
        let storage = Arc::new(InMemoryKeyValueStore::with_entries([
            (IS_LOGGED_IN_KEY, "true"),
            (CURRENT_USER_KEY, "{not json"),
        ]));
        let mut store = store_with(storage.clone());

        assert_eq!(store.bootstrap(), BootstrapOutcome::Recovered);
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
        assert!(storage.get(IS_LOGGED_IN_KEY).unwrap().is_none());
        assert!(storage.get(CURRENT_USER_KEY).unwrap().is_none());
    }

    #[test]
    fn test_bootstrap_seeds_over_dangling_flag() {
        let storage = Arc::new(InMemoryKeyValueStore::with_entries([(IS_LOGGED_IN_KEY, "true")]));
        let mut store = store_with(storage.clone());
        assert_eq!(store.bootstrap(), BootstrapOutcome::Seeded);
        assert!(store.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_bootstrap_seeds_over_user_without_flag() {
        let raw = serde_json::to_string(&FixedCredentialAuthProvider::admin_profile()).unwrap();
        let storage = Arc::new(InMemoryKeyValueStore::with_entries([(CURRENT_USER_KEY, raw)]));
        let mut store = store_with(storage.clone());

        assert_eq!(store.bootstrap(), BootstrapOutcome::Seeded);
        assert_eq!(store.user().map(|u| u.name.as_str()), Some(seed::DEMO_USER_NAME));
        assert_eq!(store.unread_count(), 2);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_bootstrap_seeds_when_flag_is_not_true() {
        let raw = serde_json::to_string(&FixedCredentialAuthProvider::admin_profile()).unwrap();
        let storage = Arc::new(InMemoryKeyValueStore::with_entries([
            (IS_LOGGED_IN_KEY, "false".to_string()),
            (CURRENT_USER_KEY, raw),
        ]));
        let mut store = store_with(storage);

        assert_eq!(store.bootstrap(), BootstrapOutcome::Seeded);
        assert!(store.is_authenticated());
        assert_eq!(store.user().map(|u| u.name.as_str()), Some(seed::DEMO_USER_NAME));
    }

    #[test]
    fn test_incomplete_entries_without_seeding_start_empty() {
        let storage = Arc::new(InMemoryKeyValueStore::with_entries([(IS_LOGGED_IN_KEY, "true")]));
        let mut store = store_with(storage).with_demo_seed(false);
        assert_eq!(store.bootstrap(), BootstrapOutcome::Empty);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_bootstrap_twice_reseeds() {
        let (mut store, _) = fresh_store();
        store.bootstrap();
        store.mark_all_notifications_read();
        store.add_activity(NewActivity::now(
            ActivityKind::Upload,
            "clip",
            "reporter",
            ActivityOutcome::Success,
        ));

        assert_eq!(store.bootstrap(), BootstrapOutcome::Seeded);
        assert_eq!(store.unread_count(), 2);
        assert_eq!(store.activities().len(), 5);
    }

    #[test]
    fn test_login_logout_round_trip() {
        let (mut store, storage) = fresh_store();
        let profile = store.login(&Credentials::new("admin", "123456")).unwrap();

        assert!(store.is_authenticated());
        assert_eq!(store.user(), Some(&profile));
        assert_eq!(
            storage.get(IS_LOGGED_IN_KEY).unwrap().as_deref(),
            Some("true")
        );

        store.logout();
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_rejected_login_leaves_state_unchanged() {
        let (mut store, storage) = fresh_store();
        store.bootstrap();
        let before = store.snapshot();

        let result = store.login(&Credentials::new("admin", "wrong"));
        assert_eq!(result, Err(AuthError::InvalidCredentials));
        assert_eq!(store.snapshot(), before);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_logout_keeps_dashboard_data() {
        let (mut store, _) = fresh_store();
        store.bootstrap();
        store.logout();

        assert_eq!(store.statistics().media_assets, 1456);
        assert_eq!(store.activities().len(), 5);
        assert_eq!(store.unread_count(), 2);
    }

    #[test]
    fn test_unread_invariant_across_operations() {
        let (mut store, _) = fresh_store();
        store.bootstrap();
        assert_unread_consistent(&store);

        let id = store
            .add_notification(NewNotification::new(NotificationKind::Error, "x", "y"))
            .id
            .clone();
        assert_unread_consistent(&store);
        assert_eq!(store.unread_count(), 3);

        assert!(store.mark_notification_read(&id));
        assert!(!store.mark_notification_read(&id));
        assert_eq!(store.unread_count(), 2);
        assert_unread_consistent(&store);

        store.mark_notification_read("3");
        assert_eq!(store.unread_count(), 2);

        store.mark_all_notifications_read();
        assert_eq!(store.unread_count(), 0);
        assert_unread_consistent(&store);
    }

    #[test]
    fn test_activity_log_capped() {
        let (mut store, _) = fresh_store();
        store.bootstrap();
        for i in 0..RECENT_ACTIVITY_LIMIT {
            store.add_activity(NewActivity::now(
                ActivityKind::Create,
                format!("draft {}", i),
                "desk",
                ActivityOutcome::Pending,
            ));
        }
        assert_eq!(store.activities().len(), RECENT_ACTIVITY_LIMIT);
        assert_eq!(
            store.activities().iter().next().unwrap().title,
            format!("draft {}", RECENT_ACTIVITY_LIMIT - 1)
        );
        assert!(store.activities().iter().all(|a| a.actor == "desk"));
    }

    #[test]
    fn test_update_statistics_merges() {
        let (mut store, _) = fresh_store();
        store.bootstrap();
        store.update_statistics(StatisticsUpdate {
            online_users: Some(99),
            system_status: Some(SystemStatus::Warning),
            ..Default::default()
        });
        assert_eq!(store.statistics().online_users, 99);
        assert_eq!(store.statistics().today_articles, 28);
        assert_eq!(store.statistics().system_status, SystemStatus::Warning);
    }

    #[test]
    fn test_ui_preferences() {
        let (mut store, _) = fresh_store();
        assert!(store.toggle_sidebar());
        assert!(!store.toggle_sidebar());
        store.set_theme(Theme::Dark);
        store.set_loading(true);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.theme, Theme::Dark);
        assert!(snapshot.loading);
        assert!(!snapshot.sidebar_collapsed);
    }

    #[test]
    fn test_from_config_applies_theme() {
        let config = RootConfig {
            default_theme: Theme::Dark,
            seed_demo_data: false,
            ..Default::default()
        };
        let mut store = AppStore::from_config(
            Arc::new(InMemoryKeyValueStore::new()),
            Arc::new(FixedCredentialAuthProvider::new()),
            &config,
        );
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(store.bootstrap(), BootstrapOutcome::Empty);
    }

    #[test]
    fn test_set_authenticated_requires_user() {
        let (mut store, _) = fresh_store();
        store.set_authenticated(true);
        assert!(!store.is_authenticated());

        store.set_user(Some(seed::demo_user()));
        store.set_authenticated(true);
        assert!(store.is_authenticated());

        store.set_user(None);
        assert!(!store.is_authenticated());
    }
}
