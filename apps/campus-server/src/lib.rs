//! Campus Events Server
//!
//! Serves the event catalog and the single local session over JSON. Both
//! stores live in memory and are seeded at startup.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod state;

use std::sync::Arc;

use auth::{FileSessionPersistence, MemoryCredentialStore, SessionStore};
use axum::Router;
use event_store::{load_events_file, seed_events, EventStore, MemoryEventStore, StoreAction};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::state::{SharedState, create_shared_state};

/// Creates the application router with all routes configured.
pub fn create_app<S: EventStore + 'static>(state: SharedState<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::create_router(state.clone())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Builds the seeded stores described by `config` and restores the
/// persisted session, if there is a readable one.
pub async fn create_state(config: &Config) -> anyhow::Result<SharedState<MemoryEventStore>> {
    let events = MemoryEventStore::new()
        .with_latency(config.catalog_latency())
        .with_capacity_policy(config.capacity_policy);

    let catalog = match &config.seed_file {
        Some(path) => load_events_file(path)
            .await
            .map_err(|e| e.during(StoreAction::Fetch))?,
        None => seed_events(),
    };
    events.load(catalog).await;

    let session = SessionStore::new(
        Arc::new(MemoryCredentialStore::seeded()),
        Arc::new(FileSessionPersistence::new(&config.data_dir)),
    )
    .with_latency(config.session_latency());

    match session.restore().await {
        Ok(Some(user)) => tracing::info!(user_id = %user.id, "Resuming previous session"),
        Ok(None) => tracing::debug!("No previous session"),
        Err(e) => tracing::warn!(error = %e, "Starting signed out"),
    }

    Ok(create_shared_state(events, session))
}

/// Initializes tracing with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
