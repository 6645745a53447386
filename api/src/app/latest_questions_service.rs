//! Latest questions feed
//!
//! The most recently active questions of one site and language.

use std::sync::Arc;

use crate::app::feed_entry::{FeedChannel, FeedEntry};
use crate::config::SiteSettings;
use crate::domain::entities::{Question, SiteId};
use crate::domain::ports::{ContentStore, QuestionFilter};
use crate::error::DomainError;

/// Maximum number of questions in the latest questions feed
pub const LATEST_QUESTIONS_LIMIT: u64 = 30;

pub const LATEST_QUESTIONS_FEED_PATH: &str = "/feeds/rss/";

/// Service for assembling the latest questions feed
pub struct LatestQuestionsService<S>
where
    S: ContentStore + ?Sized,
{
    store: Arc<S>,
    site: Arc<SiteSettings>,
}

impl<S> LatestQuestionsService<S>
where
    S: ContentStore + ?Sized,
{
    pub fn new(store: Arc<S>, site: Arc<SiteSettings>) -> Self {
        Self { store, site }
    }

    pub fn channel(&self) -> FeedChannel {
        FeedChannel::for_site(&self.site, LATEST_QUESTIONS_FEED_PATH)
    }

    /// Assemble entries for the given site and language. An empty result is
    /// a valid, empty feed.
    pub async fn assemble(
        &self,
        site_id: SiteId,
        language_code: &str,
    ) -> Result<Vec<FeedEntry>, DomainError> {
        let filter = QuestionFilter {
            site_id,
            language_code: language_code.to_string(),
            deleted: false,
        };

        let questions = self
            .store
            .get_questions(&filter, LATEST_QUESTIONS_LIMIT)
            .await?;
        tracing::debug!(
            language = language_code,
            count = questions.len(),
            "Assembling latest questions feed"
        );

        Ok(questions
            .iter()
            .map(|question| self.question_to_entry(question))
            .collect())
    }

    fn question_to_entry(&self, question: &Question) -> FeedEntry {
        let author = &question.post.author;

        FeedEntry {
            title: self.site.feed_title(),
            link: self.site.absolute_url(&question.path()),
            description: question.post.text.clone(),
            pubdate: question.post.added_at,
            author_name: Some(author.display_name().to_string()),
            author_link: Some(self.site.absolute_url(&author.profile_path())),
            guid: Some(self.site.absolute_url(&question.permanent_path())),
        }
    }
}
