//! Single-question feed
//!
//! Walks one question thread in reading order: the question, its comments,
//! then each answer followed by that answer's comments.
//!
//! The result is a lazy, one-shot stream. The question and its answer list
//! are resolved up front, so an unknown ID fails before anything is emitted;
//! each comment list is fetched only when the consumer reaches it.

use std::collections::VecDeque;
use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt};

use crate::app::feed_entry::{FeedChannel, FeedEntry, FeedItem, TitleState};
use crate::config::SiteSettings;
use crate::domain::entities::{PostId, Question};
use crate::domain::ports::ContentStore;
use crate::domain::urls;
use crate::error::DomainError;

/// Entries of a question feed, pulled in order. Cannot be restarted.
pub type EntryStream = BoxStream<'static, Result<FeedEntry, DomainError>>;

/// Work left in a thread walk
enum Segment {
    Item(FeedItem),
    CommentsOf(PostId),
}

struct ThreadWalk<S: ?Sized> {
    store: Arc<S>,
    site: Arc<SiteSettings>,
    root: Question,
    pending: VecDeque<Segment>,
    titles: TitleState,
}

impl<S> ThreadWalk<S>
where
    S: ContentStore + ?Sized,
{
    async fn next_entry(&mut self) -> Option<Result<FeedEntry, DomainError>> {
        loop {
            match self.pending.pop_front()? {
                Segment::Item(item) => return Some(Ok(self.entry_for(&item))),
                Segment::CommentsOf(parent_id) => {
                    let comments = match self.store.get_comments(&parent_id).await {
                        Ok(comments) => comments,
                        Err(e) => {
                            self.pending.clear();
                            return Some(Err(e));
                        }
                    };
                    tracing::trace!(parent = %parent_id, count = comments.len(), "Loaded comments");

                    for comment in comments.into_iter().rev() {
                        match FeedItem::reply(comment) {
                            Ok(item) => self.pending.push_front(Segment::Item(item)),
                            Err(e) => {
                                self.pending.clear();
                                return Some(Err(e));
                            }
                        }
                    }
                }
            }
        }
    }

    fn entry_for(&mut self, item: &FeedItem) -> FeedEntry {
        let title = self.titles.title_for(item);
        let path = match item {
            FeedItem::Question(question) => question.path(),
            FeedItem::Answer(post) => urls::answer_path(self.root.id(), self.root.title(), post.id),
            FeedItem::Comment(post) => {
                urls::comment_path(self.root.id(), self.root.title(), post.id)
            }
        };
        let post = item.post();

        FeedEntry {
            title,
            link: self.site.absolute_url(&path),
            description: post.text.clone(),
            pubdate: post.added_at,
            author_name: None,
            author_link: None,
            guid: None,
        }
    }
}

/// Service for assembling the feed of a single question
pub struct QuestionFeedService<S>
where
    S: ContentStore + ?Sized,
{
    store: Arc<S>,
    site: Arc<SiteSettings>,
}

impl<S> QuestionFeedService<S>
where
    S: ContentStore + ?Sized + 'static,
{
    pub fn new(store: Arc<S>, site: Arc<SiteSettings>) -> Self {
        Self { store, site }
    }

    pub fn channel(&self, question_id: &PostId) -> FeedChannel {
        FeedChannel::for_site(&self.site, &format!("/feeds/question/{}/", question_id))
    }

    /// Assemble the entries for a question thread
    pub async fn assemble(&self, question_id: &PostId) -> Result<EntryStream, DomainError> {
        let question = self
            .store
            .get_question(question_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Question {} not found", question_id)))?;

        let answers = self.store.get_answers(&question.thread.id).await?;
        tracing::debug!(
            question = %question_id,
            answers = answers.len(),
            "Assembling question feed"
        );

        let mut pending = VecDeque::with_capacity(2 + answers.len() * 2);
        pending.push_back(Segment::Item(FeedItem::Question(question.clone())));
        pending.push_back(Segment::CommentsOf(question.id()));
        for answer in answers {
            let answer_id = answer.id;
            pending.push_back(Segment::Item(FeedItem::reply(answer)?));
            pending.push_back(Segment::CommentsOf(answer_id));
        }

        let walk = ThreadWalk {
            store: self.store.clone(),
            site: self.site.clone(),
            root: question,
            pending,
            titles: TitleState::new(),
        };

        Ok(stream::unfold(walk, |mut walk| async move {
            let entry = walk.next_entry().await?;
            Some((entry, walk))
        })
        .fuse()
        .boxed())
    }

    /// Assemble and drain the stream into a list
    pub async fn collect_entries(&self, question_id: &PostId) -> Result<Vec<FeedEntry>, DomainError> {
        let mut entries = self.assemble(question_id).await?;
        let mut collected = Vec::new();
        while let Some(entry) = entries.next().await {
            collected.push(entry?);
        }
        Ok(collected)
    }
}
