//! Session gates.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use entities::User;
use event_store::EventStore;

use crate::error::ServerError;
use crate::state::AppState;

/// The signed-in identity, inserted into request extensions by the gates.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Lets the request through only while someone is signed in.
pub async fn require_session<S: EventStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    mut request: Request,
    next: Next,
) -> Response {
    match state.session.current().await {
        Some(user) => {
            request.extensions_mut().insert(CurrentUser(user));
            next.run(request).await
        }
        None => ServerError::AuthenticationRequired.into_response(),
    }
}

/// Lets the request through only for a signed-in admin.
///
/// Signed-out callers get 401, signed-in non-admins get 403.
pub async fn require_admin<S: EventStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    mut request: Request,
    next: Next,
) -> Response {
    match state.session.current().await {
        Some(user) if user.is_admin => {
            request.extensions_mut().insert(CurrentUser(user));
            next.run(request).await
        }
        Some(user) => {
            tracing::warn!(user_id = %user.id, path = %request.uri().path(), "Admin route denied");
            ServerError::PermissionDenied("Admin access required".to_string()).into_response()
        }
        None => ServerError::AuthenticationRequired.into_response(),
    }
}
