//! Persistent key-value storage trait.

use crate::error::Result;

/// Key holding `"true"` while a session is persisted.
pub const IS_LOGGED_IN_KEY: &str = "isLoggedIn";

/// Key holding the JSON-serialized [`UserProfile`](crate::user::UserProfile).
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Tab/process-local durable key-value storage.
///
/// Implementations must be all-or-nothing per call: a `set` either lands or
/// returns an error, never a partial value.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}
