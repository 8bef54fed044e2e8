//! Fixed demo dataset used by bootstrap on a fresh session.

use std::collections::BTreeSet;

use crate::state::activity::{ActivityKind, ActivityLogEntry, ActivityOutcome};
use crate::state::model::{Statistics, SystemStatus};
use crate::state::notification::{Notification, NotificationKind};
use crate::user::UserProfile;

/// Display name of the seeded demo user.
pub const DEMO_USER_NAME: &str = "张编辑";

pub const DEMO_USER_AVATAR_URL: &str = "https://trae-api-sg.mchost.guru/api/ide/v1/text_to_image?prompt=professional%20editor%20avatar%20portrait&image_size=square";

pub fn demo_user() -> UserProfile {
    UserProfile {
        id: "1".to_string(),
        name: DEMO_USER_NAME.to_string(),
        role: "主编".to_string(),
        department: "新闻编辑部".to_string(),
        avatar_url: Some(DEMO_USER_AVATAR_URL.to_string()),
        permissions: BTreeSet::from(
            [
                "content:read",
                "content:write",
                "content:review",
                "media:read",
                "media:write",
            ]
            .map(String::from),
        ),
    }
}

pub fn demo_statistics() -> Statistics {
    Statistics {
        today_articles: 28,
        pending_reviews: 12,
        media_assets: 1456,
        total_views: 89234,
        online_users: 45,
        system_status: SystemStatus::Normal,
    }
}

fn activity(
    id: &str,
    kind: ActivityKind,
    title: &str,
    actor: &str,
    timestamp: &str,
    outcome: ActivityOutcome,
) -> ActivityLogEntry {
    ActivityLogEntry {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        actor: actor.to_string(),
        timestamp: timestamp.to_string(),
        outcome,
    }
}

/// Newest first.
pub fn demo_activities() -> Vec<ActivityLogEntry> {
    use ActivityKind::*;
    use ActivityOutcome::*;

    vec![
        activity(
            "1",
            Publish,
            "市政府召开新闻发布会 介绍最新民生政策",
            "李记者",
            "2024-01-15 16:30:00",
            Success,
        ),
        activity(
            "2",
            Review,
            "本地科技企业获国家科技进步奖",
            "王编辑",
            "2024-01-15 15:45:00",
            Pending,
        ),
        activity(
            "3",
            Upload,
            "科技企业采访视频",
            "赵记者",
            "2024-01-15 14:20:00",
            Success,
        ),
        activity(
            "4",
            Create,
            "学校食堂食品安全调查报告",
            "刘记者",
            "2024-01-15 13:15:00",
            Success,
        ),
        activity(
            "5",
            Edit,
            "退休教师义务辅导学生专题",
            "陈记者",
            "2024-01-15 11:30:00",
            Success,
        ),
    ]
}

/// Newest first; two of the three are unread.
pub fn demo_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "1".to_string(),
            kind: NotificationKind::Warning,
            title: "稿件截止提醒".to_string(),
            body: "《学校食堂食品安全调查》稿件将在2小时后截止，请及时完成审核。".to_string(),
            timestamp: "2024-01-15 16:00:00".to_string(),
            read: false,
        },
        Notification {
            id: "2".to_string(),
            kind: NotificationKind::Success,
            title: "稿件发布成功".to_string(),
            body: "《市政府召开新闻发布会》已成功发布到官网和微信公众号。".to_string(),
            timestamp: "2024-01-15 15:30:00".to_string(),
            read: false,
        },
        Notification {
            id: "3".to_string(),
            kind: NotificationKind::Info,
            title: "系统维护通知".to_string(),
            body: "系统将于今晚22:00-24:00进行例行维护，请提前保存工作内容。".to_string(),
            timestamp: "2024-01-15 14:00:00".to_string(),
            read: true,
        },
    ]
}
