//! Feed handlers
//!
//! RSS endpoints for the latest questions and for individual questions.
//! Supports content negotiation: Accept: application/json for JSON, otherwise RSS.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::app::{Feed, FeedChannel, FeedEntry};
use crate::domain::entities::PostId;
use crate::error::AppError;
use crate::feed::render_rss;
use crate::AppState;

const RSS_CONTENT_TYPE: &str = "application/rss+xml; charset=utf-8";

/// Query parameters accepted by the feed endpoints
#[derive(Debug, Default, Deserialize)]
pub struct FeedQuery {
    pub lang: Option<String>,
}

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// Pick the request language: `?lang=`, then `Accept-Language`, then the site default
fn resolve_language(
    query: &FeedQuery,
    headers: &HeaderMap,
    default: &str,
) -> Result<String, AppError> {
    if let Some(lang) = query.lang.as_deref().filter(|l| !l.is_empty()) {
        return normalize_language(lang)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid language code: {}", lang)));
    }

    let from_header = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|tag| tag.split(';').next())
        .and_then(normalize_language);

    Ok(from_header.unwrap_or_else(|| default.to_string()))
}

/// Primary subtag of a language tag, lowercased ("fr-CA" -> "fr")
fn normalize_language(tag: &str) -> Option<String> {
    let primary = tag.trim().split(['-', '_']).next()?;
    let valid = (2..=8).contains(&primary.len()) && primary.chars().all(|c| c.is_ascii_alphabetic());
    valid.then(|| primary.to_ascii_lowercase())
}

fn feed_response(channel: FeedChannel, entries: Vec<FeedEntry>, json: bool) -> Response {
    if json {
        Json(Feed { channel, entries }).into_response()
    } else {
        (
            [(header::CONTENT_TYPE, RSS_CONTENT_TYPE)],
            render_rss(&channel, &entries),
        )
            .into_response()
    }
}

/// GET /feeds/rss/
///
/// Latest questions of the current site, in the request language.
pub async fn latest_questions_feed(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let language = resolve_language(&query, &headers, &state.site.default_language)?;

    let entries = state
        .latest_questions
        .assemble(state.site.site_id, &language)
        .await?;

    Ok(feed_response(
        state.latest_questions.channel(),
        entries,
        wants_json(&headers),
    ))
}

/// GET /feeds/question/:id/
///
/// A question followed by its comments, answers and answer comments.
pub async fn question_feed(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let question_id = PostId(id);

    let entries = state
        .question_feed
        .collect_entries(&question_id)
        .await
        .map_err(|e| {
            tracing::debug!("Question feed {} unavailable: {}", question_id, e);
            e
        })?;

    Ok(feed_response(
        state.question_feed.channel(&question_id),
        entries,
        wants_json(&headers),
    ))
}
