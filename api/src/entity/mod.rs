//! SeaORM entities
//!
//! Table mappings for the subset of the Q&A schema the feeds read.

pub mod posts;
pub mod threads;
pub mod users;
