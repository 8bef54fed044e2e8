//! Menu state derived from the current route.
//!
//! Everything here is a pure function of `(path, collapsed)`; nothing is
//! cached between route changes.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::navigation::menu::{find_section, sections};

/// What the sidebar should render for a given route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub selected_key: String,
    pub open_keys: BTreeSet<String>,
}

/// Outcome of a menu click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "key", rename_all = "snake_case")]
pub enum MenuAction {
    /// Expand or collapse the submenu; no navigation.
    ToggleExpand(String),
    /// Route to the key.
    Navigate(String),
}

/// True when `path` is `prefix` itself or lies beneath it.
fn is_under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Sections to expand for `path`. A collapsed rail expands nothing.
pub fn compute_open_keys(path: &str, sidebar_collapsed: bool) -> BTreeSet<String> {
    if sidebar_collapsed {
        return BTreeSet::new();
    }
    sections()
        .filter(|section| is_under(path, section.key))
        .map(|section| section.key.to_string())
        .collect()
}

/// The highlighted item is the exact path.
pub fn compute_selected_key(path: &str) -> String {
    path.to_string()
}

pub fn navigation_state(path: &str, sidebar_collapsed: bool) -> NavigationState {
    NavigationState {
        selected_key: compute_selected_key(path),
        open_keys: compute_open_keys(path, sidebar_collapsed),
    }
}

pub fn resolve_click(key: &str, is_top_level_with_children: bool) -> MenuAction {
    if is_top_level_with_children {
        MenuAction::ToggleExpand(key.to_string())
    } else {
        MenuAction::Navigate(key.to_string())
    }
}

/// [`resolve_click`] with the section lookup done against the sidebar menu.
pub fn resolve_menu_click(key: &str) -> MenuAction {
    resolve_click(key, find_section(key).is_some())
}

/// Applies a user expand/collapse of `key` to the current open set.
///
/// While collapsed the rail shows no submenus, so the result is empty.
pub fn toggle_open_key(
    open_keys: &BTreeSet<String>,
    key: &str,
    sidebar_collapsed: bool,
) -> BTreeSet<String> {
    if sidebar_collapsed {
        return BTreeSet::new();
    }
    let mut next = open_keys.clone();
    if !next.remove(key) {
        next.insert(key.to_string());
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_open_keys_for_child_route() {
        assert_eq!(compute_open_keys("/content/articles", false), keys(&["/content"]));
        assert_eq!(compute_open_keys("/data/dashboard", false), keys(&["/data"]));
        assert_eq!(compute_open_keys("/tools", false), keys(&["/tools"]));
    }

    #[test]
    fn test_open_keys_collapsed_is_empty() {
        assert!(compute_open_keys("/content/articles", true).is_empty());
    }

    #[test]
    fn test_open_keys_for_routes_without_section() {
        assert!(compute_open_keys("/", false).is_empty());
        assert!(compute_open_keys("/tasks", false).is_empty());
        assert!(compute_open_keys("/login", false).is_empty());
    }

    #[test]
    fn test_open_keys_match_whole_segments() {
        assert!(compute_open_keys("/contentious", false).is_empty());
        assert!(compute_open_keys("/database", false).is_empty());
    }

    #[test]
    fn test_selected_key_is_path() {
        assert_eq!(compute_selected_key("/data/dashboard"), "/data/dashboard");
        assert_eq!(compute_selected_key("/unknown/leaf"), "/unknown/leaf");
    }

    #[test]
    fn test_navigation_state() {
        let state = navigation_state("/tools/media", false);
        assert_eq!(state.selected_key, "/tools/media");
        assert_eq!(state.open_keys, keys(&["/tools"]));
    }

    #[test]
    fn test_resolve_click() {
        assert_eq!(
            resolve_click("/content", true),
            MenuAction::ToggleExpand("/content".to_string())
        );
        assert_eq!(
            resolve_click("/content/live", false),
            MenuAction::Navigate("/content/live".to_string())
        );
    }

    #[test]
    fn test_resolve_menu_click_uses_menu() {
        assert_eq!(
            resolve_menu_click("/data"),
            MenuAction::ToggleExpand("/data".to_string())
        );
        assert_eq!(
            resolve_menu_click("/tasks"),
            MenuAction::Navigate("/tasks".to_string())
        );
        assert_eq!(resolve_menu_click("/"), MenuAction::Navigate("/".to_string()));
    }

    #[test]
    fn test_toggle_open_key() {
        let open = keys(&["/content"]);
        let opened = toggle_open_key(&open, "/data", false);
        assert_eq!(opened, keys(&["/content", "/data"]));

        let closed = toggle_open_key(&opened, "/content", false);
        assert_eq!(closed, keys(&["/data"]));

        assert!(toggle_open_key(&open, "/data", true).is_empty());
    }

    #[test]
    fn test_menu_action_json() {
        let json = serde_json::to_value(MenuAction::Navigate("/tasks".to_string())).unwrap();
        assert_eq!(json["action"], "navigate");
        assert_eq!(json["key"], "/tasks");
    }
}
