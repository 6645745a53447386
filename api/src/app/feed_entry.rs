//! Feed records
//!
//! Channel metadata and per-item entries handed to the renderer, plus the
//! running-title state used while walking a question thread.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::SiteSettings;
use crate::domain::entities::{Post, PostType, Question};
use crate::error::DomainError;

/// Feed-level metadata, constant for a site configuration
#[derive(Debug, Clone, Serialize)]
pub struct FeedChannel {
    pub title: String,
    pub link: String,
    pub description: String,
    pub copyright: String,
    /// Absolute URL of the feed itself
    pub feed_url: String,
}

impl FeedChannel {
    pub fn for_site(site: &SiteSettings, feed_path: &str) -> Self {
        Self {
            title: site.feed_title(),
            link: site.absolute_url("/"),
            description: site.app_description.clone(),
            copyright: site.app_copyright.clone(),
            feed_url: site.absolute_url(feed_path),
        }
    }
}

/// One syndicated item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    pub description: String,
    pub pubdate: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_link: Option<String>,
    /// Stable identifier; the renderer falls back to `link` when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
}

/// A complete feed, as returned to JSON clients
#[derive(Debug, Clone, Serialize)]
pub struct Feed {
    pub channel: FeedChannel,
    pub entries: Vec<FeedEntry>,
}

/// A post in a question thread, typed by its role in the feed
#[derive(Debug, Clone)]
pub enum FeedItem {
    Question(Question),
    Answer(Post),
    Comment(Post),
}

impl FeedItem {
    /// Wrap an answer or comment returned by the store
    pub fn reply(post: Post) -> Result<Self, DomainError> {
        match post.post_type {
            PostType::Answer => Ok(FeedItem::Answer(post)),
            PostType::Comment => Ok(FeedItem::Comment(post)),
            PostType::Question => Err(DomainError::Internal(format!(
                "Question {} returned where a reply was expected",
                post.id
            ))),
        }
    }

    pub fn post(&self) -> &Post {
        match self {
            FeedItem::Question(question) => &question.post,
            FeedItem::Answer(post) | FeedItem::Comment(post) => post,
        }
    }
}

/// Running title carried across a thread walk.
///
/// A question item sets the running title; answers and comments that follow
/// are titled against it. Items must be fed in emission order.
#[derive(Debug, Clone, Default)]
pub struct TitleState {
    current_question_title: Option<String>,
}

impl TitleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Title for the next item in the sequence
    pub fn title_for(&mut self, item: &FeedItem) -> String {
        match item {
            FeedItem::Question(question) => {
                let title = question.title().to_string();
                self.current_question_title = Some(title.clone());
                title
            }
            FeedItem::Answer(post) => {
                format!("Answer by {} for {}", post.author, self.running_title())
            }
            FeedItem::Comment(post) => {
                format!("Comment by {} for {}", post.author, self.running_title())
            }
        }
    }

    fn running_title(&self) -> &str {
        self.current_question_title.as_deref().unwrap_or_default()
    }
}
