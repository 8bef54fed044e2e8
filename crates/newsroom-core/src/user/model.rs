//! UserProfile domain model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Permission string that grants every other permission.
pub const ALL_PERMISSIONS: &str = "all";

/// The authenticated actor for the current tab.
///
/// Serialized as camelCase JSON when persisted under the `currentUser` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "avatar")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub permissions: BTreeSet<String>,
}

impl UserProfile {
    /// Returns true if the profile carries `permission` or the `all` wildcard.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission) || self.permissions.contains(ALL_PERMISSIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(permissions: &[&str]) -> UserProfile {
        UserProfile {
            id: "7".to_string(),
            name: "Reporter".to_string(),
            role: "reporter".to_string(),
            department: "city desk".to_string(),
            avatar_url: None,
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_has_permission() {
        let user = profile(&["content:read"]);
        assert!(user.has_permission("content:read"));
        assert!(!user.has_permission("content:write"));
    }

    #[test]
    fn test_all_wildcard() {
        let user = profile(&["all"]);
        assert!(user.has_permission("media:write"));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(profile(&[])).unwrap();
        assert!(json.get("avatarUrl").is_none());
        assert_eq!(json["department"], "city desk");

        let parsed: UserProfile = serde_json::from_str(
            r#"{"id":"1","name":"n","role":"r","department":"d","avatar":"a.png"}"#,
        )
        .unwrap();
        assert_eq!(parsed.avatar_url.as_deref(), Some("a.png"));
        assert!(parsed.permissions.is_empty());
    }
}
