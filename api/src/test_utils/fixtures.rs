//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Timestamps are derived from post IDs so fixtures built twice compare equal.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::config::SiteSettings;
use crate::domain::entities::{
    Author, Post, PostId, PostType, Question, SiteId, Thread, ThreadId, UserId,
};

/// Site settings used across tests
pub fn test_site() -> SiteSettings {
    SiteSettings {
        app_url: "https://ask.test".to_string(),
        app_title: "Ask Test".to_string(),
        app_description: "Questions and answers for testing".to_string(),
        app_copyright: "Copyright Ask Test".to_string(),
        site_id: SiteId(1),
        default_language: "en".to_string(),
    }
}

fn posted_at(id: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(id)
}

/// Create a test author
pub fn test_author(id: i64, username: &str) -> Author {
    Author {
        id: UserId(id),
        username: username.to_string(),
    }
}

/// Create a question on site 1 in English, asked by `asker`
pub fn test_question(id: i64, title: &str) -> Question {
    test_question_in(id, title, SiteId(1), "en")
}

/// Create a question on a specific site and language
pub fn test_question_in(id: i64, title: &str, site_id: SiteId, language_code: &str) -> Question {
    let thread_id = ThreadId(id);
    Question {
        post: Post {
            id: PostId(id),
            post_type: PostType::Question,
            author: test_author(100, "asker"),
            added_at: posted_at(id),
            text: format!("<p>Body of question {}</p>", id),
            thread_id: Some(thread_id),
            parent_id: None,
            deleted: false,
        },
        thread: Thread {
            id: thread_id,
            title: title.to_string(),
            site_id,
            language_code: language_code.to_string(),
            last_activity_at: posted_at(id),
        },
    }
}

/// Create an answer to a question
pub fn test_answer(id: i64, question: &Question, username: &str) -> Post {
    Post {
        id: PostId(id),
        post_type: PostType::Answer,
        author: test_author(1000 + id, username),
        added_at: posted_at(id),
        text: format!("<p>Answer {}</p>", id),
        thread_id: Some(question.thread.id),
        parent_id: None,
        deleted: false,
    }
}

/// Create a comment on a question or answer
pub fn test_comment(id: i64, parent_id: PostId, username: &str) -> Post {
    Post {
        id: PostId(id),
        post_type: PostType::Comment,
        author: test_author(1000 + id, username),
        added_at: posted_at(id),
        text: format!("Comment {}", id),
        thread_id: None,
        parent_id: Some(parent_id),
        deleted: false,
    }
}
