//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod author;
pub mod post;
pub mod thread;

pub use author::{Author, UserId};
pub use post::{Post, PostId, PostType};
pub use thread::{Question, SiteId, Thread, ThreadId};
