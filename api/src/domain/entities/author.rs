//! Author domain entity
//!
//! The account a post is attributed to. Profile details are reached through
//! this facade rather than by delegating to a separate profile record.

use serde::{Deserialize, Serialize};

use crate::domain::urls;

/// Unique identifier for a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A post author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: UserId,
    pub username: String,
}

impl Author {
    /// Name shown in feed titles and the author element
    pub fn display_name(&self) -> &str {
        &self.username
    }

    /// Site-relative path of the author's profile page
    pub fn profile_path(&self) -> String {
        urls::user_profile_path(self.id, &self.username)
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
