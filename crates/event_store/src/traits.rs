//! Event store trait definitions.

use std::{fmt, str::FromStr};

use async_trait::async_trait;
use entities::{Event, EventCategory, EventDraft, EventPatch};
use serde::{Deserialize, Serialize};

use crate::EventStoreResult;

/// Whether the store itself refuses registrations past capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityPolicy {
    /// The store never refuses; callers are expected to stop offering
    /// registration once an event is full.
    #[default]
    Advisory,
    /// The store refuses registration on a full event.
    Enforced,
}

impl fmt::Display for CapacityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Advisory => f.write_str("advisory"),
            Self::Enforced => f.write_str("enforced"),
        }
    }
}

impl FromStr for CapacityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "advisory" => Ok(Self::Advisory),
            "enforced" => Ok(Self::Enforced),
            other => Err(format!("unknown capacity policy: {other}")),
        }
    }
}

/// Trait for event catalog storage operations.
///
/// Lookups never fail for a missing id; they return `None` or an empty list.
/// Mutations on an unknown id are silent no-ops.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Lists every event in insertion order.
    async fn list(&self) -> EventStoreResult<Vec<Event>>;

    /// Gets an event by ID.
    async fn get_by_id(&self, id: &str) -> EventStoreResult<Option<Event>>;

    /// Lists events of one category, in insertion order.
    async fn get_by_category(&self, category: EventCategory) -> EventStoreResult<Vec<Event>>;

    /// Lists featured events, derived from the current collection.
    async fn featured(&self) -> EventStoreResult<Vec<Event>>;

    /// Adds one registration to an event. Full events are refused only
    /// under [`CapacityPolicy::Enforced`].
    ///
    /// Returns the updated event, or `None` if the id is unknown.
    async fn register(&self, event_id: &str) -> EventStoreResult<Option<Event>>;

    /// Adds one registration unless the event is already full, whatever the
    /// store's policy. Fails with [`EventStoreError::EventFull`] when full.
    ///
    /// [`EventStoreError::EventFull`]: crate::EventStoreError::EventFull
    async fn register_if_open(&self, event_id: &str) -> EventStoreResult<Option<Event>>;

    /// Creates a new event and appends it to the catalog.
    async fn create(&self, draft: EventDraft) -> EventStoreResult<Event>;

    /// Merges `patch` into an event.
    ///
    /// Returns the updated event, or `None` if the id is unknown.
    async fn update(&self, id: &str, patch: EventPatch) -> EventStoreResult<Option<Event>>;

    /// Deletes an event. Returns whether anything was removed.
    async fn delete(&self, id: &str) -> EventStoreResult<bool>;
}
