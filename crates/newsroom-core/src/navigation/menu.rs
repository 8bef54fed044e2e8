//! Sidebar menu definition and route lookup.

use serde::Serialize;

/// One entry of the sidebar menu. The key doubles as the route path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub key: &'static str,
    pub label: &'static str,
    pub children: &'static [MenuItem],
}

impl MenuItem {
    const fn leaf(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            children: &[],
        }
    }

    const fn section(
        key: &'static str,
        label: &'static str,
        children: &'static [MenuItem],
    ) -> Self {
        Self {
            key,
            label,
            children,
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

pub const HOME_PATH: &str = "/";

const CONTENT_CHILDREN: &[MenuItem] = &[
    MenuItem::leaf("/content/clues", "线索库"),
    MenuItem::leaf("/content/topics", "选题库"),
    MenuItem::leaf("/content/media", "媒资库"),
    MenuItem::leaf("/content/articles", "稿件库"),
    MenuItem::leaf("/content/tv-scripts", "电视文稿库"),
    MenuItem::leaf("/content/short-videos", "短视频发布"),
    MenuItem::leaf("/content/live", "视频直播"),
    MenuItem::leaf("/content/activities", "活动管理"),
    MenuItem::leaf("/content/interactive", "互动功能"),
];

const DATA_CHILDREN: &[MenuItem] = &[
    MenuItem::leaf("/data/overview", "概要数据"),
    MenuItem::leaf("/data/dashboard", "关注数据看板"),
];

const TOOLS_CHILDREN: &[MenuItem] = &[
    MenuItem::leaf("/tools/business", "业务系统"),
    MenuItem::leaf("/tools/media", "媒体工具"),
];

/// Top-level sidebar entries in display order.
pub const MENU: &[MenuItem] = &[
    MenuItem::leaf(HOME_PATH, "工作台首页"),
    MenuItem::section("/content", "内容版块", CONTENT_CHILDREN),
    MenuItem::leaf("/tasks", "任务管理"),
    MenuItem::section("/data", "数据分析", DATA_CHILDREN),
    MenuItem::section("/tools", "快捷入口", TOOLS_CHILDREN),
];

/// Top-level entries that own a submenu.
pub fn sections() -> impl Iterator<Item = &'static MenuItem> {
    MENU.iter().filter(|item| item.has_children())
}

/// Returns the top-level item for `key` if it owns children.
pub fn find_section(key: &str) -> Option<&'static MenuItem> {
    sections().find(|item| item.key == key)
}

/// Finds any menu item, top-level or nested, by exact key.
pub fn find_item(key: &str) -> Option<&'static MenuItem> {
    MENU.iter()
        .flat_map(|item| std::iter::once(item).chain(item.children.iter()))
        .find(|item| item.key == key)
}

/// Display title for a known route.
pub fn route_title(path: &str) -> Option<&'static str> {
    find_item(path).map(|item| item.label)
}
