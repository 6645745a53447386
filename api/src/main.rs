//! askfeed API Server
//!
//! RSS syndication for a question and answer site: a feed of the latest
//! questions and a feed per question thread.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{http::Method, routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::PostgresContentStore;
use app::{LatestQuestionsService, QuestionFeedService};
use config::{Config, SiteSettings};
use domain::ports::ContentStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub question_feed: Arc<QuestionFeedService<dyn ContentStore>>,
    pub latest_questions: Arc<LatestQuestionsService<dyn ContentStore>>,
    pub site: Arc<SiteSettings>,
}

impl AppState {
    pub fn new(store: Arc<dyn ContentStore>, site: SiteSettings) -> Self {
        let site = Arc::new(site);
        Self {
            question_feed: Arc::new(QuestionFeedService::new(store.clone(), site.clone())),
            latest_questions: Arc::new(LatestQuestionsService::new(store, site.clone())),
            site,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Feeds (public)
        .route("/feeds/rss/", get(handlers::latest_questions_feed))
        .route("/feeds/question/:id/", get(handlers::question_feed))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET])
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,askfeed_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting askfeed API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let store: Arc<dyn ContentStore> = Arc::new(PostgresContentStore::new(db));

    let state = AppState::new(store, config.site.clone());

    // Rate limiting config: 5 req/sec sustained, burst of 20 per client IP
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(5)
            .burst_size(20)
            .finish()
            .context("Failed to build governor config")?,
    );

    let app = build_router(state).layer(GovernorLayer {
        config: governor_config,
    });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
