//! Async facade over [`AppStore`].
//!
//! The store itself is synchronous. This service serializes access through a
//! tokio mutex, applies the configured login delay and publishes a fresh
//! [`StoreSnapshot`] after every mutation.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use newsroom_core::auth::{AuthError, AuthProvider, Credentials, FixedCredentialAuthProvider};
use newsroom_core::config::RootConfig;
use newsroom_core::error::{Result, WorkspaceError};
use newsroom_core::navigation::{self, MenuAction, NavigationState, RouteDecision};
use newsroom_core::state::{
    ActivityLogEntry, AppStore, BootstrapOutcome, NewActivity, NewNotification, Notification,
    StatisticsUpdate, StoreSnapshot, Theme,
};
use newsroom_core::storage::KeyValueStore;
use newsroom_core::user::UserProfile;
use newsroom_infrastructure::{ConfigService, FileKeyValueStore, WorkspacePaths};
use tokio::sync::{Mutex, watch};

#[derive(Clone)]
pub struct WorkspaceService {
    store: Arc<Mutex<AppStore>>,
    updates: Arc<watch::Sender<StoreSnapshot>>,
    login_delay: Duration,
    logins_in_flight: Arc<AtomicUsize>,
}

impl WorkspaceService {
    /// Wraps `store`; the login delay comes from `config`.
    pub fn new(store: AppStore, config: &RootConfig) -> Self {
        let (updates, _) = watch::channel(store.snapshot());
        Self {
            store: Arc::new(Mutex::new(store)),
            updates: Arc::new(updates),
            login_delay: Duration::from_millis(config.login_delay_ms),
            logins_in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn from_config(
        storage: Arc<dyn KeyValueStore>,
        auth: Arc<dyn AuthProvider>,
        config: &RootConfig,
    ) -> Self {
        Self::new(AppStore::from_config(storage, auth, config), config)
    }

    /// Loads `config.toml` under `paths` and wires the file-backed session store.
    ///
    /// The returned service is not bootstrapped yet.
    pub fn open(paths: WorkspacePaths) -> Result<(Self, RootConfig)> {
        let config = ConfigService::new(paths.clone()).get_config()?;
        let service = Self::open_with_config(&paths, &config)?;
        Ok((service, config))
    }

    /// Like [`open`](Self::open) for callers that already hold the config.
    pub fn open_with_config(paths: &WorkspacePaths, config: &RootConfig) -> Result<Self> {
        let session_file = paths
            .session_file()
            .map_err(|e| WorkspaceError::config(e.to_string()))?;
        tracing::info!("[Workspace] Session file: {}", session_file.display());

        Ok(Self::from_config(
            Arc::new(FileKeyValueStore::new(session_file)),
            Arc::new(FixedCredentialAuthProvider::new()),
            config,
        ))
    }

    /// Receives a snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.updates.subscribe()
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        self.store.lock().await.snapshot()
    }

    async fn mutate<R>(&self, f: impl FnOnce(&mut AppStore) -> R) -> R {
        let mut store = self.store.lock().await;
        let result = f(&mut *store);
        self.updates.send_replace(store.snapshot());
        tracing::debug!("[Workspace] State update published");
        result
    }

    // ============ Session ============

    pub async fn bootstrap(&self) -> BootstrapOutcome {
        self.mutate(|store| store.bootstrap()).await
    }

    /// Runs a login attempt with `loading` raised for its whole duration.
    ///
    /// With overlapping attempts, `loading` drops only once the last one resolves.
    pub async fn login(
        &self,
        credentials: &Credentials,
    ) -> std::result::Result<UserProfile, AuthError> {
        self.mutate(|store| {
            self.logins_in_flight.fetch_add(1, Ordering::SeqCst);
            store.set_loading(true)
        })
        .await;
        if !self.login_delay.is_zero() {
            tokio::time::sleep(self.login_delay).await;
        }
        self.mutate(|store| {
            let result = store.login(credentials);
            if self.logins_in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
                store.set_loading(false);
            }
            result
        })
        .await
    }

    pub async fn logout(&self) {
        self.mutate(|store| store.logout()).await
    }

    pub async fn set_loading(&self, loading: bool) {
        self.mutate(|store| store.set_loading(loading)).await
    }

    // ============ Dashboard ============

    pub async fn update_statistics(&self, update: StatisticsUpdate) {
        self.mutate(|store| store.update_statistics(update)).await
    }

    pub async fn add_activity(&self, activity: NewActivity) -> ActivityLogEntry {
        self.mutate(|store| store.add_activity(activity).clone()).await
    }

    pub async fn add_notification(&self, notification: NewNotification) -> Notification {
        self.mutate(|store| store.add_notification(notification).clone()).await
    }

    pub async fn mark_notification_read(&self, id: &str) -> bool {
        self.mutate(|store| store.mark_notification_read(id)).await
    }

    pub async fn mark_all_notifications_read(&self) -> usize {
        self.mutate(|store| store.mark_all_notifications_read()).await
    }

    // ============ UI preferences ============

    pub async fn toggle_sidebar(&self) -> bool {
        self.mutate(|store| store.toggle_sidebar()).await
    }

    pub async fn set_theme(&self, theme: Theme) {
        self.mutate(|store| store.set_theme(theme)).await
    }

    // ============ Navigation ============

    /// Sidebar state for `path` under the current collapse flag.
    pub async fn navigation(&self, path: &str) -> NavigationState {
        let collapsed = self.store.lock().await.sidebar_collapsed();
        navigation::navigation_state(path, collapsed)
    }

    pub async fn guard(&self, path: &str) -> RouteDecision {
        let authenticated = self.store.lock().await.is_authenticated();
        navigation::guard_route(path, authenticated)
    }

    pub fn click(&self, key: &str) -> MenuAction {
        navigation::resolve_menu_click(key)
    }
}
