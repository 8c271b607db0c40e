//! API endpoints.

pub mod admin;
pub mod auth;
pub mod event;

use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    Router,
    routing::{get, post},
};
use event_store::EventStore;

use crate::error::ServerError;
use crate::middleware::{require_admin, require_session};
use crate::state::AppState;

/// Creates the API router with all endpoints.
///
/// `state` is only used to build the session gates; the caller still
/// attaches it with `with_state`.
pub fn create_router<S: EventStore + 'static>(state: Arc<AppState<S>>) -> Router<Arc<AppState<S>>> {
    // Endpoints that need a signed-in user
    let member: Router<Arc<AppState<S>>> = Router::new()
        .route("/api/event/register", post(event::register_for_event))
        .route("/api/event/create", post(event::create_event))
        .route_layer(from_fn_with_state(state.clone(), require_session::<S>));

    // Admin dashboard endpoints
    let admin: Router<Arc<AppState<S>>> = Router::new()
        .route("/api/admin/event/list", post(admin::list_events))
        .route("/api/admin/event/create", post(admin::create_event))
        .route("/api/admin/event/update", post(admin::update_event))
        .route("/api/admin/event/delete", post(admin::delete_event))
        .route_layer(from_fn_with_state(state, require_admin::<S>));

    Router::new()
        // Auth endpoints
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::get_current_user))
        // Public event endpoints
        .route("/api/event/list", post(event::list_events))
        .route("/api/event/featured", get(event::get_featured))
        .route("/api/event/get", post(event::get_event))
        .merge(member)
        .merge(admin)
        // Health check
        .route("/health", get(health_check))
        .fallback(not_found)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> ServerError {
    ServerError::NotFound("Route not found".to_string())
}
