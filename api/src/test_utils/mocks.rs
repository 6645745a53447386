//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Post, PostId, PostType, Question, ThreadId};
use crate::domain::ports::{ContentStore, QuestionFilter};
use crate::error::DomainError;

// ============================================================================
// In-Memory Content Store
// ============================================================================

/// Answers and comments are returned in insertion order
#[derive(Default)]
pub struct InMemoryContentStore {
    questions: Arc<RwLock<Vec<Question>>>,
    posts: Arc<RwLock<Vec<Post>>>,
    comment_fetches: AtomicUsize,
    fail_comments: bool,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a question for testing
    pub fn with_question(self, question: Question) -> Self {
        self.questions.write().unwrap().push(question);
        self
    }

    /// Pre-populate with an answer or comment
    pub fn with_post(self, post: Post) -> Self {
        self.posts.write().unwrap().push(post);
        self
    }

    /// Make every comment lookup fail with a database error
    pub fn failing_comments(mut self) -> Self {
        self.fail_comments = true;
        self
    }

    /// Number of comment lookups served so far
    pub fn comment_fetches(&self) -> usize {
        self.comment_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn get_question(&self, id: &PostId) -> Result<Option<Question>, DomainError> {
        let questions = self.questions.read().unwrap();
        Ok(questions
            .iter()
            .find(|q| q.post.id == *id && q.post.post_type == PostType::Question)
            .cloned())
    }

    async fn get_comments(&self, parent_id: &PostId) -> Result<Vec<Post>, DomainError> {
        self.comment_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_comments {
            return Err(DomainError::Database("comment lookup failed".to_string()));
        }

        let posts = self.posts.read().unwrap();
        Ok(posts
            .iter()
            .filter(|p| {
                p.post_type == PostType::Comment && p.parent_id == Some(*parent_id) && !p.deleted
            })
            .cloned()
            .collect())
    }

    async fn get_answers(&self, thread_id: &ThreadId) -> Result<Vec<Post>, DomainError> {
        let posts = self.posts.read().unwrap();
        Ok(posts
            .iter()
            .filter(|p| {
                p.post_type == PostType::Answer && p.thread_id == Some(*thread_id) && !p.deleted
            })
            .cloned()
            .collect())
    }

    async fn get_questions(
        &self,
        filter: &QuestionFilter,
        limit: u64,
    ) -> Result<Vec<Question>, DomainError> {
        let questions = self.questions.read().unwrap();
        let mut matching: Vec<Question> = questions
            .iter()
            .filter(|q| {
                q.thread.site_id == filter.site_id
                    && q.thread.language_code == filter.language_code
                    && q.post.deleted == filter.deleted
            })
            .cloned()
            .collect();

        matching.sort_by_key(|q| (Reverse(q.thread.last_activity_at), Reverse(q.post.id)));
        matching.truncate(limit as usize);

        Ok(matching)
    }
}
