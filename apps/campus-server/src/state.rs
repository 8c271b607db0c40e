//! Application state.

use std::sync::Arc;

use auth::SessionStore;
use event_store::EventStore;

/// Shared application state.
pub struct AppState<S: EventStore> {
    /// Event catalog.
    pub events: S,
    /// The single local session.
    pub session: SessionStore,
}

impl<S: EventStore> AppState<S> {
    /// Creates new application state.
    pub fn new(events: S, session: SessionStore) -> Self {
        Self { events, session }
    }
}

/// Type alias for shared state.
pub type SharedState<S> = Arc<AppState<S>>;

/// Creates shared state from the stores.
pub fn create_shared_state<S: EventStore>(events: S, session: SessionStore) -> SharedState<S> {
    Arc::new(AppState::new(events, session))
}
