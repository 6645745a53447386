//! Canonical site paths
//!
//! Paths are site-relative; `SiteSettings::absolute_url` prefixes the base URL.

use std::sync::OnceLock;

use regex::Regex;

use super::entities::{PostId, UserId};

fn separator_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^\p{L}\p{N}]+").expect("valid slug pattern"))
}

/// Turn a title into a URL fragment: lowercase words joined by `-`
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let slug = separator_pattern().replace_all(&lowered, "-");
    urlencoding::encode(slug.trim_matches('-')).into_owned()
}

pub fn question_path(id: PostId, title: &str) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        question_path_no_slug(id)
    } else {
        format!("/question/{}/{}/", id, slug)
    }
}

pub fn question_path_no_slug(id: PostId) -> String {
    format!("/question/{}/", id)
}

/// Answers live on their question's page
pub fn answer_path(question_id: PostId, question_title: &str, answer_id: PostId) -> String {
    format!(
        "{}?answer={}#post-id-{}",
        question_path(question_id, question_title),
        answer_id,
        answer_id
    )
}

pub fn comment_path(question_id: PostId, question_title: &str, comment_id: PostId) -> String {
    format!(
        "{}?comment={}#comment-{}",
        question_path(question_id, question_title),
        comment_id,
        comment_id
    )
}

pub fn user_profile_path(id: UserId, username: &str) -> String {
    let slug = slugify(username);
    if slug.is_empty() {
        format!("/users/{}/", id)
    } else {
        format!("/users/{}/{}/", id, slug)
    }
}
