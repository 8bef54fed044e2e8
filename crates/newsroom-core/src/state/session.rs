//! Authenticated actor for the current tab.

use crate::user::UserProfile;

/// `is_authenticated` implies `user` is present. The reverse may briefly not
/// hold (a user set before the flag is raised).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    is_authenticated: bool,
    user: Option<UserProfile>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the user and raises the authenticated flag.
    pub fn authenticate(&mut self, user: UserProfile) {
        self.user = Some(user);
        self.is_authenticated = true;
    }

    pub fn clear(&mut self) {
        self.user = None;
        self.is_authenticated = false;
    }

    /// Replaces the user. Clearing the user also drops the authenticated flag.
    pub fn set_user(&mut self, user: Option<UserProfile>) {
        if user.is_none() {
            self.is_authenticated = false;
        }
        self.user = user;
    }

    /// Sets the authenticated flag.
    ///
    /// Returns `false` and leaves the flag alone when asked to authenticate
    /// without a user.
    pub fn set_authenticated(&mut self, authenticated: bool) -> bool {
        if authenticated && self.user.is_none() {
            return false;
        }
        self.is_authenticated = authenticated;
        true
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }
}
