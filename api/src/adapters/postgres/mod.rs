//! PostgreSQL adapters
//!
//! Implementations of port traits using SeaORM and PostgreSQL.

pub mod content_store;


pub use content_store::PostgresContentStore;
