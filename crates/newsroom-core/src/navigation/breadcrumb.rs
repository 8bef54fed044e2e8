use serde::Serialize;

use crate::navigation::menu::{HOME_PATH, route_title};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub path: String,
    pub title: String,
    /// The crumb for the current page is rendered as plain text.
    pub clickable: bool,
}

/// Builds the trail for `path`: home first, then every known ancestor.
///
/// Unknown segments are skipped. Only the crumb for the final segment is
/// non-clickable, so a trail ending in an unknown segment keeps its last
/// known crumb clickable.
pub fn breadcrumbs(path: &str) -> Vec<Breadcrumb> {
    let home_title = route_title(HOME_PATH).unwrap_or_default();
    let mut trail = vec![Breadcrumb {
        path: HOME_PATH.to_string(),
        title: home_title.to_string(),
        clickable: path != HOME_PATH,
    }];

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let mut prefix = String::new();
    for (index, segment) in segments.iter().enumerate() {
        prefix.push('/');
        prefix.push_str(segment);
        if let Some(title) = route_title(&prefix) {
            trail.push(Breadcrumb {
                path: prefix.clone(),
                title: title.to_string(),
                clickable: index + 1 < segments.len(),
            });
        }
    }
    trail
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(trail: &[Breadcrumb]) -> Vec<&str> {
        trail.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn test_home_only() {
        let trail = breadcrumbs("/");
        assert_eq!(trail.len(), 1);
        assert!(!trail[0].clickable);
    }

    #[test]
    fn test_nested_route() {
        let trail = breadcrumbs("/content/articles");
        assert_eq!(titles(&trail), vec!["工作台首页", "内容版块", "稿件库"]);
        assert_eq!(
            trail.iter().map(|c| c.clickable).collect::<Vec<_>>(),
            vec![true, true, false]
        );
        assert_eq!(trail[1].path, "/content");
        assert_eq!(trail[2].path, "/content/articles");
    }

    #[test]
    fn test_top_level_leaf() {
        let trail = breadcrumbs("/tasks");
        assert_eq!(titles(&trail), vec!["工作台首页", "任务管理"]);
        assert!(!trail[1].clickable);
    }

    #[test]
    fn test_unknown_tail_is_skipped() {
        let trail = breadcrumbs("/data/unknown");
        assert_eq!(titles(&trail), vec!["工作台首页", "数据分析"]);
        assert!(trail[1].clickable);
    }
}
