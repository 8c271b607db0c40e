//! Admin dashboard API endpoints.

use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use event_store::{
    query::{EventQuery, SearchScope},
    validate_event, EventStore, StoreAction,
};
use rpc_protocol::{requests::*, responses::*, EventDetail};

use super::event::{create_from_form, find_event};
use crate::error::{ServerError, ServerResult};
use crate::extract::ApiJson;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Lists every event for the dashboard table.
///
/// The search also matches category names, and the list is sorted by start
/// date unless another order is requested.
pub async fn list_events<S: EventStore>(
    State(state): State<Arc<AppState<S>>>,
    ApiJson(request): ApiJson<AdminListEventsRequest>,
) -> ServerResult<Json<ListEventsResponse>> {
    let events = state
        .events
        .list()
        .await
        .map_err(|e| e.during(StoreAction::Fetch))?;

    let query = EventQuery::new()
        .with_search(request.search)
        .with_scope(SearchScope::Admin)
        .sorted_by(request.sort.unwrap_or_default());

    let events: Vec<EventDetail> = query
        .apply(events)
        .into_iter()
        .map(EventDetail::from)
        .collect();

    Ok(Json(ListEventsResponse {
        title: "Manage Events".to_string(),
        total_count: events.len() as u32,
        events,
    }))
}

/// Creates an event from the dashboard form.
pub async fn create_event<S: EventStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(CurrentUser(admin)): Extension<CurrentUser>,
    ApiJson(request): ApiJson<CreateEventRequest>,
) -> ServerResult<Json<CreateEventResponse>> {
    let event = create_from_form(&state.events, &request.event).await?;

    tracing::info!(event_id = %event.id, admin_id = %admin.id, "Event created from dashboard");

    Ok(Json(CreateEventResponse { event }))
}

/// Applies a partial update after validating the merged record.
pub async fn update_event<S: EventStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(CurrentUser(admin)): Extension<CurrentUser>,
    ApiJson(request): ApiJson<UpdateEventRequest>,
) -> ServerResult<Json<UpdateEventResponse>> {
    let existing = find_event(&state.events, &request.event_id).await?;
    validate_event(&existing.merged(&request.patch))?;

    let event = state
        .events
        .update(&request.event_id, request.patch)
        .await
        .map_err(|e| e.during(StoreAction::Update))?
        .ok_or_else(|| ServerError::NotFound("Event not found".to_string()))?;

    tracing::info!(event_id = %event.id, admin_id = %admin.id, "Event updated");

    Ok(Json(UpdateEventResponse { event }))
}

/// Deletes an event. Deleting an unknown id succeeds with `deleted: false`.
pub async fn delete_event<S: EventStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(CurrentUser(admin)): Extension<CurrentUser>,
    ApiJson(request): ApiJson<DeleteEventRequest>,
) -> ServerResult<Json<DeleteEventResponse>> {
    let deleted = state
        .events
        .delete(&request.event_id)
        .await
        .map_err(|e| e.during(StoreAction::Delete))?;

    tracing::info!(
        event_id = %request.event_id,
        admin_id = %admin.id,
        deleted,
        "Event delete requested"
    );

    Ok(Json(DeleteEventResponse { deleted }))
}
