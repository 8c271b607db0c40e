//! Event store error types.

use std::fmt;

use thiserror::Error;

use crate::ValidationError;

/// The catalog operation an error occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    Fetch,
    Register,
    Create,
    Update,
    Delete,
}

impl StoreAction {
    /// Returns the generic message shown when `self` fails unexpectedly.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Fetch => "Failed to fetch events",
            Self::Register => "Failed to register for event",
            Self::Create => "Failed to create event",
            Self::Update => "Failed to update event",
            Self::Delete => "Failed to delete event",
        }
    }
}

impl fmt::Display for StoreAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// Errors that can occur during event store operations.
#[derive(Debug, Error)]
pub enum EventStoreError {
    /// Submitted event data failed a field check.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Registration refused because the event is at capacity.
    #[error("Event is full: {id}")]
    EventFull { id: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unexpected failure, reported with the action's generic message.
    #[error("{action}")]
    Operation { action: StoreAction, reason: String },
}

impl EventStoreError {
    /// Creates an event full error.
    pub fn event_full(id: impl Into<String>) -> Self {
        Self::EventFull { id: id.into() }
    }

    /// Collapses unexpected failures into the generic error for `action`.
    /// Validation and capacity errors pass through unchanged.
    pub fn during(self, action: StoreAction) -> Self {
        match self {
            Self::Validation(_) | Self::EventFull { .. } | Self::Operation { .. } => self,
            other => Self::Operation {
                action,
                reason: other.to_string(),
            },
        }
    }
}

/// Result type for event store operations.
pub type EventStoreResult<T> = Result<T, EventStoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_during_hides_unexpected_errors() {
        let io = std::io::Error::other("disk on fire");
        let err = EventStoreError::from(io).during(StoreAction::Create);

        assert_eq!(err.to_string(), "Failed to create event");
        assert!(matches!(
            err,
            EventStoreError::Operation { action: StoreAction::Create, .. }
        ));
    }

    #[test]
    fn test_during_keeps_domain_errors() {
        let err = EventStoreError::event_full("1").during(StoreAction::Register);
        assert!(matches!(err, EventStoreError::EventFull { .. }));

        let err = EventStoreError::from(ValidationError::NonPositiveCapacity)
            .during(StoreAction::Update);
        assert_eq!(err.to_string(), "Capacity must be greater than 0");
    }
}
