//! Core types for Postdeck

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single post in the feed
///
/// The `user` field references an external user entity by id; no
/// referential integrity is enforced on it here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    /// Creation time, RFC 3339
    pub date: String,
    pub title: String,
    pub content: String,
    pub user: String,
    pub reactions: Reactions,
}

impl Post {
    /// Build a fresh post with a generated id, the current timestamp and
    /// zeroed reaction counters
    pub fn new(title: String, content: String, user: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: chrono::Utc::now().to_rfc3339(),
            title,
            content,
            user,
            reactions: Reactions::default(),
        }
    }
}

/// Reaction counters for a post
///
/// The set of reaction kinds is fixed; counters start at zero and are only
/// ever incremented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reactions {
    pub thumbs_up: u64,
    pub hooray: u64,
    pub heart: u64,
    pub rocket: u64,
    pub eyes: u64,
}

impl Reactions {
    /// Bump the counter for one reaction kind
    pub fn increment(&mut self, kind: ReactionKind) {
        match kind {
            ReactionKind::ThumbsUp => self.thumbs_up += 1,
            ReactionKind::Hooray => self.hooray += 1,
            ReactionKind::Heart => self.heart += 1,
            ReactionKind::Rocket => self.rocket += 1,
            ReactionKind::Eyes => self.eyes += 1,
        }
    }

    /// Sum of all counters
    pub fn total(&self) -> u64 {
        self.thumbs_up + self.hooray + self.heart + self.rocket + self.eyes
    }
}

/// The fixed set of reaction kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReactionKind {
    ThumbsUp,
    Hooray,
    Heart,
    Rocket,
    Eyes,
}

/// Client-supplied body for creating a post on the server
///
/// The server assigns the id, timestamp and reaction counters and returns
/// the canonical [`Post`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub user: String,
}

/// Load status of the feed, driven by the fetch lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}
