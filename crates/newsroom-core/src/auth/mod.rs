//! Authentication seam between the store and an identity backend.

mod provider;

pub use provider::{AuthError, AuthProvider, Credentials, FixedCredentialAuthProvider};
