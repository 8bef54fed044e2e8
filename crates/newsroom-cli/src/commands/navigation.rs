use anyhow::Result;
use newsroom_core::navigation::{breadcrumbs, navigation_state, resolve_menu_click, route_title};
use serde_json::json;

use super::print_json;

pub fn nav(path: &str, collapsed: bool) -> Result<()> {
    print_json(&json!({
        "title": route_title(path),
        "navigation": navigation_state(path, collapsed),
        "breadcrumbs": breadcrumbs(path),
    }))
}

pub fn click(key: &str) -> Result<()> {
    print_json(&resolve_menu_click(key))
}
