//! Thread domain entity
//!
//! A thread groups one question with its answers. Site, language and
//! activity time live on the thread, not on the posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Post, PostId};
use crate::domain::urls;

/// Unique identifier for a thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadId(pub i64);

impl std::fmt::Display for ThreadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Site a thread was posted on (multi-site deployments)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SiteId(pub i64);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    pub id: ThreadId,
    pub title: String,
    pub site_id: SiteId,
    pub language_code: String,
    pub last_activity_at: DateTime<Utc>,
}

/// A question post together with its thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub post: Post,
    pub thread: Thread,
}

impl Question {
    pub fn id(&self) -> PostId {
        self.post.id
    }

    pub fn title(&self) -> &str {
        &self.thread.title
    }

    /// Canonical path including the title slug
    pub fn path(&self) -> String {
        urls::question_path(self.id(), self.title())
    }

    /// Canonical path without the slug; survives title edits
    pub fn permanent_path(&self) -> String {
        urls::question_path_no_slug(self.id())
    }
}
