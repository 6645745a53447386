//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services pull from the content store port and shape feed records.

pub mod feed_entry;
pub mod latest_questions_service;
pub mod question_feed_service;

pub use feed_entry::{Feed, FeedChannel, FeedEntry};
pub use latest_questions_service::LatestQuestionsService;
pub use question_feed_service::QuestionFeedService;
