//! In-memory event store implementation.

use async_trait::async_trait;
use entities::{
    new_record_id, simulate_latency, Event, EventCategory, EventDraft, EventPatch,
};
use tokio::sync::RwLock;

use crate::{
    CapacityPolicy, CatalogLatency, EventStore, EventStoreError, EventStoreResult, StoreAction,
};

/// Event catalog held in process memory.
///
/// Events are kept in insertion order; new events are appended.
#[derive(Debug)]
pub struct MemoryEventStore {
    events: RwLock<Vec<Event>>,
    latency: CatalogLatency,
    capacity_policy: CapacityPolicy,
}

impl MemoryEventStore {
    /// Creates an empty store with no simulated latency.
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
            latency: CatalogLatency::none(),
            capacity_policy: CapacityPolicy::default(),
        }
    }

    /// Creates a store already holding `events`.
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: RwLock::new(events),
            ..Self::new()
        }
    }

    /// Sets the simulated latency.
    pub fn with_latency(mut self, latency: CatalogLatency) -> Self {
        self.latency = latency;
        self
    }

    /// Sets the capacity policy.
    pub fn with_capacity_policy(mut self, policy: CapacityPolicy) -> Self {
        self.capacity_policy = policy;
        self
    }

    /// Increments the registration count after the register delay. The
    /// capacity check and the increment happen under one write lock.
    async fn add_registration(
        &self,
        event_id: &str,
        refuse_full: bool,
    ) -> EventStoreResult<Option<Event>> {
        simulate_latency(self.latency.register).await;

        let mut events = self.events.write().await;
        let Some(event) = events.iter_mut().find(|e| e.id == event_id) else {
            tracing::debug!(event_id, "Registration for unknown event ignored");
            return Ok(None);
        };

        if refuse_full && event.is_full() {
            tracing::info!(
                event_id,
                capacity = event.capacity,
                "Registration refused, event is full"
            );
            return Err(EventStoreError::event_full(event_id));
        }

        let Some(count) = event.registered_count.checked_add(1) else {
            return Err(EventStoreError::Operation {
                action: StoreAction::Register,
                reason: format!("registration count overflow on {event_id}"),
            });
        };
        event.registered_count = count;

        tracing::info!(
            event_id,
            registered_count = event.registered_count,
            capacity = event.capacity,
            "Registered for event"
        );
        Ok(Some(event.clone()))
    }

    /// Replaces the catalog with `events` after the simulated fetch delay.
    pub async fn load(&self, events: Vec<Event>) {
        simulate_latency(self.latency.fetch).await;
        let count = events.len();
        *self.events.write().await = events;
        tracing::info!(count, "Event catalog loaded");
    }
}

impl Default for MemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn list(&self) -> EventStoreResult<Vec<Event>> {
        Ok(self.events.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> EventStoreResult<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.iter().find(|e| e.id == id).cloned())
    }

    async fn get_by_category(&self, category: EventCategory) -> EventStoreResult<Vec<Event>> {
        let events = self.events.read().await;
        Ok(events
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .collect())
    }

    async fn featured(&self) -> EventStoreResult<Vec<Event>> {
        let events = self.events.read().await;
        Ok(events.iter().filter(|e| e.is_featured).cloned().collect())
    }

    async fn register(&self, event_id: &str) -> EventStoreResult<Option<Event>> {
        let refuse_full = self.capacity_policy == CapacityPolicy::Enforced;
        self.add_registration(event_id, refuse_full).await
    }

    async fn register_if_open(&self, event_id: &str) -> EventStoreResult<Option<Event>> {
        self.add_registration(event_id, true).await
    }

    async fn create(&self, draft: EventDraft) -> EventStoreResult<Event> {
        simulate_latency(self.latency.create).await;

        let mut events = self.events.write().await;
        let mut event = Event::from_draft(draft);
        while events.iter().any(|e| e.id == event.id) {
            event.id = new_record_id();
        }
        events.push(event.clone());

        tracing::info!(event_id = %event.id, title = %event.title, "Event created");
        Ok(event)
    }

    async fn update(&self, id: &str, patch: EventPatch) -> EventStoreResult<Option<Event>> {
        simulate_latency(self.latency.update).await;

        let mut events = self.events.write().await;
        let Some(event) = events.iter_mut().find(|e| e.id == id) else {
            tracing::debug!(event_id = id, "Update for unknown event ignored");
            return Ok(None);
        };

        event.apply(patch);
        event.touch();

        tracing::info!(event_id = id, "Event updated");
        Ok(Some(event.clone()))
    }

    async fn delete(&self, id: &str) -> EventStoreResult<bool> {
        simulate_latency(self.latency.delete).await;

        let mut events = self.events.write().await;
        let before = events.len();
        events.retain(|e| e.id != id);
        let removed = events.len() < before;

        if removed {
            tracing::info!(event_id = id, "Event deleted");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::seed_events;

    fn draft(title: &str, category: EventCategory) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            description: format!("{title} description"),
            category,
            location: "Main Hall".to_string(),
            start_date: Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap(),
            image_url: "https://example.com/cover.jpg".to_string(),
            organizer: "Student Union".to_string(),
            is_featured: false,
            capacity: 2,
        }
    }

    #[tokio::test]
    async fn test_event_crud() {
        let store = MemoryEventStore::new();

        // Create
        let created = store
            .create(draft("Hackathon", EventCategory::Tech))
            .await
            .unwrap();
        assert_eq!(created.registered_count, 0);
        assert_eq!(created.created_at, created.updated_at);

        // Get
        let fetched = store.get_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "Hackathon");

        // List
        assert_eq!(store.list().await.unwrap().len(), 1);

        // Delete
        assert!(tokio_test::assert_ok!(store.delete(&created.id).await));
        assert!(store.get_by_id(&created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_appends_in_order() {
        let store = MemoryEventStore::with_events(seed_events());
        let created = store
            .create(draft("Music Fest", EventCategory::Culture))
            .await
            .unwrap();

        let events = store.list().await.unwrap();
        assert_eq!(events.len(), 7);
        assert_eq!(events.last().unwrap().id, created.id);
    }

    #[tokio::test]
    async fn test_get_by_category_preserves_order() {
        let store = MemoryEventStore::with_events(seed_events());

        let tech = store.get_by_category(EventCategory::Tech).await.unwrap();
        let ids: Vec<&str> = tech.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "6"]);
    }

    #[tokio::test]
    async fn test_register_increments_only_target() {
        let store = MemoryEventStore::with_events(seed_events());
        let before = store.list().await.unwrap();

        let updated = store.register("3").await.unwrap().unwrap();
        assert_eq!(updated.registered_count, 181);

        let after = store.list().await.unwrap();
        for (old, new) in before.iter().zip(after.iter()) {
            if old.id == "3" {
                assert_eq!(new.registered_count, old.registered_count + 1);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[tokio::test]
    async fn test_register_unknown_event_is_noop() {
        let store = MemoryEventStore::with_events(seed_events());
        let before = store.list().await.unwrap();

        assert!(store.register("missing").await.unwrap().is_none());
        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_register_advisory_allows_overbooking() {
        let store = MemoryEventStore::new();
        let event = store
            .create(draft("Tiny Talk", EventCategory::Club))
            .await
            .unwrap();

        for _ in 0..3 {
            store.register(&event.id).await.unwrap();
        }
        let event = store.get_by_id(&event.id).await.unwrap().unwrap();
        assert_eq!(event.registered_count, 3);
    }

    #[tokio::test]
    async fn test_register_enforced_refuses_when_full() {
        let store = MemoryEventStore::new().with_capacity_policy(CapacityPolicy::Enforced);
        let event = store
            .create(draft("Tiny Talk", EventCategory::Club))
            .await
            .unwrap();

        store.register(&event.id).await.unwrap();
        store.register(&event.id).await.unwrap();
        let err = store.register(&event.id).await.unwrap_err();

        assert!(matches!(err, EventStoreError::EventFull { .. }));
        let event = store.get_by_id(&event.id).await.unwrap().unwrap();
        assert_eq!(event.registered_count, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_if_open_admits_one_of_two_for_last_seat() {
        let mut events = seed_events();
        events[4].registered_count = 49;
        let store = MemoryEventStore::with_events(events).with_latency(CatalogLatency::default());

        let (first, second) =
            tokio::join!(store.register_if_open("5"), store.register_if_open("5"));

        let outcomes = [first, second];
        let admitted = outcomes.iter().filter(|r| matches!(r, Ok(Some(_)))).count();
        let refused = outcomes
            .iter()
            .filter(|r| matches!(r, Err(EventStoreError::EventFull { .. })))
            .count();
        assert_eq!((admitted, refused), (1, 1));

        let event = store.get_by_id("5").await.unwrap().unwrap();
        assert_eq!(event.registered_count, 50);
    }

    #[tokio::test]
    async fn test_register_if_open_ignores_advisory_policy() {
        let mut events = seed_events();
        events[4].registered_count = events[4].capacity;
        let store = MemoryEventStore::with_events(events);

        let err = store.register_if_open("5").await.unwrap_err();
        assert!(matches!(err, EventStoreError::EventFull { .. }));
        assert!(store.register_if_open("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_register_count_overflow_is_an_error() {
        let mut events = seed_events();
        events[0].registered_count = u32::MAX;
        let store = MemoryEventStore::with_events(events);

        let err = store.register("1").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to register for event");

        let event = store.get_by_id("1").await.unwrap().unwrap();
        assert_eq!(event.registered_count, u32::MAX);
    }

    #[tokio::test]
    async fn test_update_changes_only_named_fields() {
        let store = MemoryEventStore::with_events(seed_events());
        let before = store.get_by_id("4").await.unwrap().unwrap();

        let patch = EventPatch {
            location: Some("Library Foyer".to_string()),
            ..Default::default()
        };
        let after = store.update("4", patch).await.unwrap().unwrap();

        assert_eq!(after.location, "Library Foyer");
        assert!(after.updated_at > before.updated_at);
        assert_eq!(
            Event {
                location: before.location.clone(),
                updated_at: before.updated_at,
                ..after.clone()
            },
            before
        );
    }

    #[tokio::test]
    async fn test_update_twice_strictly_increases_timestamp() {
        let store = MemoryEventStore::with_events(seed_events());

        let first = store
            .update("1", EventPatch::default())
            .await
            .unwrap()
            .unwrap();
        let second = store
            .update("1", EventPatch::default())
            .await
            .unwrap()
            .unwrap();
        assert!(second.updated_at > first.updated_at);
    }

    #[tokio::test]
    async fn test_update_unknown_event_is_noop() {
        let store = MemoryEventStore::with_events(seed_events());
        let before = store.list().await.unwrap();

        let patch = EventPatch {
            title: Some("Ghost".to_string()),
            ..Default::default()
        };
        assert!(store.update("missing", patch).await.unwrap().is_none());
        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryEventStore::with_events(seed_events());

        assert!(store.delete("2").await.unwrap());
        assert!(!store.delete("2").await.unwrap());

        let events = store.list().await.unwrap();
        assert_eq!(events.len(), 5);
        assert!(events.iter().all(|e| e.id != "2"));
    }

    #[tokio::test]
    async fn test_featured_tracks_collection() {
        let store = MemoryEventStore::with_events(seed_events());
        let ids = |events: Vec<Event>| events.into_iter().map(|e| e.id).collect::<Vec<_>>();

        assert_eq!(ids(store.featured().await.unwrap()), vec!["1", "2", "5"]);

        let patch = EventPatch {
            is_featured: Some(true),
            ..Default::default()
        };
        store.update("6", patch).await.unwrap();
        store.delete("2").await.unwrap();

        assert_eq!(ids(store.featured().await.unwrap()), vec!["1", "5", "6"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_waits_for_simulated_latency() {
        let store = MemoryEventStore::with_events(seed_events())
            .with_latency(CatalogLatency::default());
        let started = tokio::time::Instant::now();

        store.register("1").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_replaces_catalog_after_fetch_delay() {
        let store = MemoryEventStore::new().with_latency(CatalogLatency::default());
        let started = tokio::time::Instant::now();

        store.load(seed_events()).await;
        assert!(started.elapsed() >= Duration::from_millis(1000));
        assert_eq!(store.list().await.unwrap().len(), 6);
    }
}
