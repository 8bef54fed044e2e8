//! Sidebar navigation derived from the current route.

pub mod breadcrumb;
pub mod guard;
pub mod menu;
pub mod sync;

pub use breadcrumb::{Breadcrumb, breadcrumbs};
pub use guard::{LOGIN_PATH, RouteDecision, guard_route};
pub use menu::{HOME_PATH, MENU, MenuItem, find_item, find_section, route_title};
pub use sync::{
    MenuAction, NavigationState, compute_open_keys, compute_selected_key, navigation_state,
    resolve_click, resolve_menu_click, toggle_open_key,
};
