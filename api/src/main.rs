//! Work Journal server
//!
//! A small journaling web application: dated, categorized entries submitted
//! through a form, persisted, and redisplayed grouped by Sunday-anchored
//! week. Uses hexagonal (ports & adapters) architecture for clean separation
//! of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod view;

#[cfg(test)]
mod test_utils;


use adapters::PostgresEntryRepository;
use app::JournalService;
use config::Config;
use domain::ports::EntryRepository;

/// Application state shared across all handlers
///
/// Generic over the entry store so the HTTP surface can be exercised
/// against the in-memory repository in tests.
pub struct AppState<ER>
where
    ER: EntryRepository,
{
    pub journal: Arc<JournalService<ER>>,
}

impl<ER: EntryRepository> Clone for AppState<ER> {
    fn clone(&self) -> Self {
        Self {
            journal: self.journal.clone(),
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

/// Build the application router over any entry store
pub fn router<ER>(state: AppState<ER>) -> Router
where
    ER: EntryRepository + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/", get(handlers::get_journal::<ER>))
        .route("/entries", post(handlers::create_entry::<ER>))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
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
                .unwrap_or_else(|_| "info,journal_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Work Journal...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL and make sure the schema exists
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url).await?;
    adapters::ensure_schema(&db).await?;
    tracing::info!("Database ready");

    // Explicitly constructed store, passed down the call chain
    let entry_repo = Arc::new(PostgresEntryRepository::new(db));
    let journal_service = Arc::new(JournalService::new(entry_repo));

    let state = AppState {
        journal: journal_service,
    };

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
