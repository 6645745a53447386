//! Content store port
//!
//! Read-only access to questions, answers and comments.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Post, PostId, Question, SiteId, ThreadId};
use crate::error::DomainError;

/// Selection criteria for question listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionFilter {
    pub site_id: SiteId,
    pub language_code: String,
    pub deleted: bool,
}

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Find a question by post ID; `None` when the ID is unknown or not a question
    async fn get_question(&self, id: &PostId) -> Result<Option<Question>, DomainError>;

    /// Comments attached directly to a question or answer, in store order
    async fn get_comments(&self, parent_id: &PostId) -> Result<Vec<Post>, DomainError>;

    /// Answers in a thread, in store order
    async fn get_answers(&self, thread_id: &ThreadId) -> Result<Vec<Post>, DomainError>;

    /// Questions matching the filter, most recently active thread first
    /// (ties broken by post ID descending), at most `limit` of them
    async fn get_questions(
        &self,
        filter: &QuestionFilter,
        limit: u64,
    ) -> Result<Vec<Question>, DomainError>;
}
