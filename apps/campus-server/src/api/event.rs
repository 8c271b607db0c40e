//! Event catalog API endpoints.

use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use entities::Event;
use event_store::{
    query::{CategoryFilter, EventQuery},
    EventForm, EventStore, StoreAction,
};
use rpc_protocol::{requests::*, responses::*, EventDetail};

use crate::error::{ServerError, ServerResult};
use crate::extract::ApiJson;
use crate::middleware::CurrentUser;
use crate::state::AppState;

fn event_not_found() -> ServerError {
    ServerError::NotFound("Event not found".to_string())
}

/// Loads one event or fails with 404.
pub(crate) async fn find_event<S: EventStore>(
    store: &S,
    event_id: &str,
) -> ServerResult<Event> {
    store
        .get_by_id(event_id)
        .await
        .map_err(|e| e.during(StoreAction::Fetch))?
        .ok_or_else(event_not_found)
}

/// Validates a submitted form and stores the resulting event.
pub(crate) async fn create_from_form<S: EventStore>(
    store: &S,
    form: &EventForm,
) -> ServerResult<Event> {
    let draft = form.validate()?;
    let event = store
        .create(draft)
        .await
        .map_err(|e| e.during(StoreAction::Create))?;
    Ok(event)
}

/// Searches the catalog by text and category.
pub async fn list_events<S: EventStore>(
    State(state): State<Arc<AppState<S>>>,
    ApiJson(request): ApiJson<ListEventsRequest>,
) -> ServerResult<Json<ListEventsResponse>> {
    let events = match request.category {
        CategoryFilter::All => state.events.list().await,
        CategoryFilter::Only(category) => state.events.get_by_category(category).await,
    }
    .map_err(|e| e.during(StoreAction::Fetch))?;

    let mut query = EventQuery::new()
        .with_search(request.search)
        .with_category(request.category);
    if let Some(sort) = request.sort {
        query = query.sorted_by(sort);
    }

    let events: Vec<EventDetail> = query
        .apply(events)
        .into_iter()
        .map(EventDetail::from)
        .collect();

    Ok(Json(ListEventsResponse {
        title: request.category.title().to_string(),
        total_count: events.len() as u32,
        events,
    }))
}

/// Lists the featured events.
pub async fn get_featured<S: EventStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<FeaturedEventsResponse>> {
    let events = state
        .events
        .featured()
        .await
        .map_err(|e| e.during(StoreAction::Fetch))?;

    Ok(Json(FeaturedEventsResponse {
        events: events.into_iter().map(EventDetail::from).collect(),
    }))
}

/// Gets one event with its capacity display fields.
pub async fn get_event<S: EventStore>(
    State(state): State<Arc<AppState<S>>>,
    ApiJson(request): ApiJson<GetEventRequest>,
) -> ServerResult<Json<GetEventResponse>> {
    let event = find_event(&state.events, &request.event_id).await?;

    Ok(Json(GetEventResponse {
        event: event.into(),
    }))
}

/// Registers the signed-in user for an event. Full events are refused
/// with 409 whatever the store's capacity policy.
pub async fn register_for_event<S: EventStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ApiJson(request): ApiJson<RegisterForEventRequest>,
) -> ServerResult<Json<RegisterForEventResponse>> {
    let event = state
        .events
        .register_if_open(&request.event_id)
        .await
        .inspect_err(|e| tracing::info!(user_id = %user.id, error = %e, "Registration refused"))
        .map_err(|e| e.during(StoreAction::Register))?
        .ok_or_else(event_not_found)?;

    tracing::info!(
        event_id = %event.id,
        user_id = %user.id,
        registered = event.registered_count,
        capacity = event.capacity,
        "Registered for event"
    );

    Ok(Json(RegisterForEventResponse {
        event: event.into(),
    }))
}

/// Creates an event from the member-facing form.
pub async fn create_event<S: EventStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ApiJson(request): ApiJson<CreateEventRequest>,
) -> ServerResult<Json<CreateEventResponse>> {
    let event = create_from_form(&state.events, &request.event).await?;

    tracing::info!(event_id = %event.id, user_id = %user.id, "Event created");

    Ok(Json(CreateEventResponse { event }))
}
