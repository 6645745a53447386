//! Post domain entity
//!
//! A unit of content on the site: a question, an answer or a comment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Author, ThreadId};

/// Unique identifier for a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostId(pub i64);

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of post; fixed for the lifetime of the post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Question,
    Answer,
    Comment,
}

impl std::fmt::Display for PostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostType::Question => write!(f, "question"),
            PostType::Answer => write!(f, "answer"),
            PostType::Comment => write!(f, "comment"),
        }
    }
}

impl std::str::FromStr for PostType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "question" => Ok(PostType::Question),
            "answer" => Ok(PostType::Answer),
            "comment" => Ok(PostType::Comment),
            _ => Err(format!("Unknown post type: {}", s)),
        }
    }
}

/// A post as read from the content store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub post_type: PostType,
    pub author: Author,
    pub added_at: DateTime<Utc>,
    pub text: String,
    /// Owning thread (questions and answers)
    pub thread_id: Option<ThreadId>,
    /// Parent post (comments only)
    pub parent_id: Option<PostId>,
    pub deleted: bool,
}
