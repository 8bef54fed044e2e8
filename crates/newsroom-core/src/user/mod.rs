//! User domain module.
//!
//! - `model`: the authenticated user's profile

mod model;

pub use model::{ALL_PERMISSIONS, UserProfile};
