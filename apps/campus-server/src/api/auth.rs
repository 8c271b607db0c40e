//! Session API endpoints.

use std::sync::Arc;

use auth::{LoginForm, SignupForm};
use axum::{extract::State, Json};
use event_store::EventStore;
use rpc_protocol::responses::*;

use crate::error::ServerResult;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Signs in with email and password.
pub async fn login<S: EventStore>(
    State(state): State<Arc<AppState<S>>>,
    ApiJson(form): ApiJson<LoginForm>,
) -> ServerResult<Json<AuthResponse>> {
    form.validate()?;

    let user = state
        .session
        .login(&form.email, &form.password)
        .await
        .inspect_err(|e| tracing::info!(error = %e, "Login rejected"))?;

    Ok(Json(AuthResponse { user }))
}

/// Creates a non-admin account and signs it in.
pub async fn signup<S: EventStore>(
    State(state): State<Arc<AppState<S>>>,
    ApiJson(form): ApiJson<SignupForm>,
) -> ServerResult<Json<AuthResponse>> {
    form.validate()?;

    let user = state
        .session
        .signup(&form.email, &form.password, &form.display_name)
        .await
        .inspect_err(|e| tracing::info!(error = %e, "Signup rejected"))?;

    Ok(Json(AuthResponse { user }))
}

/// Signs out. Succeeds even when nobody is signed in.
pub async fn logout<S: EventStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<LogoutResponse>> {
    state.session.logout().await;
    Ok(Json(LogoutResponse {}))
}

/// Returns the signed-in identity, if any.
pub async fn get_current_user<S: EventStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<CurrentUserResponse>> {
    let user = state.session.current().await;

    Ok(Json(CurrentUserResponse {
        is_authenticated: user.is_some(),
        user,
    }))
}
