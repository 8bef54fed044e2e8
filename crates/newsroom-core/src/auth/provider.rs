//! Authentication provider trait and the development credential stub.

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

use crate::user::{ALL_PERMISSIONS, UserProfile};

/// Errors a login attempt can surface to the UI.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// Username/password pair submitted by the login form.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Resolves credentials to a user profile.
///
/// The store only ever talks to this trait, so a real identity backend can
/// replace [`FixedCredentialAuthProvider`] without touching store logic.
pub trait AuthProvider: Send + Sync {
    fn authenticate(&self, credentials: &Credentials) -> Result<UserProfile, AuthError>;
}

/// Development stub that accepts exactly one username/password pair.
///
/// This is not a security mechanism. The pair is compared in plain text and
/// always yields the same administrator profile.
#[derive(Debug, Clone)]
pub struct FixedCredentialAuthProvider {
    username: String,
    password: String,
}

impl FixedCredentialAuthProvider {
    pub const DEFAULT_USERNAME: &'static str = "admin";
    pub const DEFAULT_PASSWORD: &'static str = "123456";

    pub fn new() -> Self {
        Self {
            username: Self::DEFAULT_USERNAME.to_string(),
            password: Self::DEFAULT_PASSWORD.to_string(),
        }
    }

    /// Profile handed out on a successful login.
    pub fn admin_profile() -> UserProfile {
        UserProfile {
            id: "1".to_string(),
            name: "管理员".to_string(),
            role: "系统管理员".to_string(),
            department: "系统管理部".to_string(),
            avatar_url: None,
            permissions: BTreeSet::from([ALL_PERMISSIONS.to_string()]),
        }
    }
}

impl Default for FixedCredentialAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthProvider for FixedCredentialAuthProvider {
    fn authenticate(&self, credentials: &Credentials) -> Result<UserProfile, AuthError> {
        if credentials.username == self.username && credentials.password == self.password {
            Ok(Self::admin_profile())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
