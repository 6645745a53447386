//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod content_store;

pub use content_store::{ContentStore, QuestionFilter};
