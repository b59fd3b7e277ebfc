use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedStatus {
    Online,
    Offline,
    Blocked,
    Queued,
}

impl FeedStatus {
    /// Statuses a moderator may assign. `Queued` is only ever set by the server.
    pub fn is_review_action(&self) -> bool {
        !matches!(self, FeedStatus::Queued)
    }

    /// Statuses an owner may switch their own feed between.
    pub fn is_visibility_action(&self) -> bool {
        matches!(self, FeedStatus::Online | FeedStatus::Offline)
    }
}

impl Display for FeedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            FeedStatus::Online => "Online",
            FeedStatus::Offline => "Offline",
            FeedStatus::Blocked => "Blocked",
            FeedStatus::Queued => "Queued",
        };

        f.write_str(status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedStatusUpdate {
    pub feed_id: i32,
    pub action: FeedStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeratorFeed {
    pub id: i32,
    pub url: String,
    pub title: String,
    pub author_name: String,
    pub link_web: Option<String>,
    pub status: FeedStatus,
    pub submitted: DateTime<Utc>,
    pub username: String,
}
