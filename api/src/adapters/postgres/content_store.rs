//! PostgreSQL adapter for ContentStore

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::domain::entities::{
    Author, Post, PostId, PostType, Question, SiteId, Thread, ThreadId, UserId,
};
use crate::domain::ports::{ContentStore, QuestionFilter};
use crate::entity::{posts, threads, users};
use crate::error::DomainError;

/// PostgreSQL implementation of ContentStore
pub struct PostgresContentStore {
    db: DatabaseConnection,
}

impl PostgresContentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load the authors of a batch of posts, keyed by user ID
    async fn load_authors(
        &self,
        models: &[posts::Model],
    ) -> Result<HashMap<i32, users::Model>, DomainError> {
        let mut ids: Vec<i32> = models.iter().map(|m| m.author_id).collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let results = users::Entity::find()
            .filter(users::Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|u| (u.id, u)).collect())
    }

    async fn load_posts(&self, models: Vec<posts::Model>) -> Result<Vec<Post>, DomainError> {
        let authors = self.load_authors(&models).await?;
        models
            .into_iter()
            .map(|m| post_from_model(m, &authors))
            .collect()
    }
}

/// Table IDs are 32-bit; anything wider cannot exist in the store
fn db_id(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}

#[async_trait]
impl ContentStore for PostgresContentStore {
    async fn get_question(&self, id: &PostId) -> Result<Option<Question>, DomainError> {
        let Some(pk) = db_id(id.0) else {
            return Ok(None);
        };

        let result = posts::Entity::find_by_id(pk)
            .filter(posts::Column::PostType.eq(PostType::Question.to_string()))
            .find_also_related(threads::Entity)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let Some((post, Some(thread))) = result else {
            return Ok(None);
        };

        let authors = self.load_authors(std::slice::from_ref(&post)).await?;
        Ok(Some(Question {
            post: post_from_model(post, &authors)?,
            thread: thread.into(),
        }))
    }

    async fn get_comments(&self, parent_id: &PostId) -> Result<Vec<Post>, DomainError> {
        let Some(parent_pk) = db_id(parent_id.0) else {
            return Ok(Vec::new());
        };

        let results = posts::Entity::find()
            .filter(posts::Column::PostType.eq(PostType::Comment.to_string()))
            .filter(posts::Column::ParentId.eq(parent_pk))
            .filter(posts::Column::Deleted.eq(false))
            .order_by_asc(posts::Column::AddedAt)
            .order_by_asc(posts::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        self.load_posts(results).await
    }

    async fn get_answers(&self, thread_id: &ThreadId) -> Result<Vec<Post>, DomainError> {
        let Some(thread_pk) = db_id(thread_id.0) else {
            return Ok(Vec::new());
        };

        let results = posts::Entity::find()
            .filter(posts::Column::PostType.eq(PostType::Answer.to_string()))
            .filter(posts::Column::ThreadId.eq(thread_pk))
            .filter(posts::Column::Deleted.eq(false))
            .order_by_asc(posts::Column::AddedAt)
            .order_by_asc(posts::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        self.load_posts(results).await
    }

    async fn get_questions(
        &self,
        filter: &QuestionFilter,
        limit: u64,
    ) -> Result<Vec<Question>, DomainError> {
        let Some(site_id) = db_id(filter.site_id.0) else {
            return Ok(Vec::new());
        };

        let results = posts::Entity::find()
            .find_also_related(threads::Entity)
            .filter(posts::Column::PostType.eq(PostType::Question.to_string()))
            .filter(posts::Column::Deleted.eq(filter.deleted))
            .filter(threads::Column::SiteId.eq(site_id))
            .filter(threads::Column::LanguageCode.eq(filter.language_code.as_str()))
            .order_by_desc(threads::Column::LastActivityAt)
            .order_by_desc(posts::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let pairs: Vec<(posts::Model, threads::Model)> = results
            .into_iter()
            .filter_map(|(post, thread)| thread.map(|t| (post, t)))
            .collect();
        let post_models: Vec<posts::Model> = pairs.iter().map(|(p, _)| p.clone()).collect();
        let authors = self.load_authors(&post_models).await?;

        pairs
            .into_iter()
            .map(|(post, thread)| {
                Ok(Question {
                    post: post_from_model(post, &authors)?,
                    thread: thread.into(),
                })
            })
            .collect()
    }
}

/// Convert a SeaORM post model plus its author to a domain entity
fn post_from_model(
    model: posts::Model,
    authors: &HashMap<i32, users::Model>,
) -> Result<Post, DomainError> {
    let post_type = model
        .post_type
        .parse::<PostType>()
        .map_err(DomainError::Internal)?;
    let author = authors.get(&model.author_id).ok_or_else(|| {
        DomainError::Internal(format!(
            "Author {} of post {} not found",
            model.author_id, model.id
        ))
    })?;

    Ok(Post {
        id: PostId(model.id.into()),
        post_type,
        author: Author {
            id: UserId(author.id.into()),
            username: author.username.clone(),
        },
        added_at: model.added_at.with_timezone(&Utc),
        text: model.text.unwrap_or_default(),
        thread_id: model.thread_id.map(|id| ThreadId(id.into())),
        parent_id: model.parent_id.map(|id| PostId(id.into())),
        deleted: model.deleted,
    })
}

/// Convert SeaORM model to domain entity
impl From<threads::Model> for Thread {
    fn from(model: threads::Model) -> Self {
        Thread {
            id: ThreadId(model.id.into()),
            title: model.title,
            site_id: SiteId(model.site_id.into()),
            language_code: model.language_code,
            last_activity_at: model.last_activity_at.with_timezone(&Utc),
        }
    }
}
