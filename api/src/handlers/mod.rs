//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod feeds;

pub use feeds::{latest_questions_feed, question_feed};
