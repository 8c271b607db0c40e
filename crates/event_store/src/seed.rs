//! Built-in seed catalog and seed file loading.

use std::path::Path;

use chrono::{DateTime, Utc};
use entities::{Event, EventCategory};

use crate::{parse_event_date, EventStoreResult};

struct SeedEvent {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: EventCategory,
    location: &'static str,
    start_date: &'static str,
    end_date: &'static str,
    image_url: &'static str,
    organizer: &'static str,
    is_featured: bool,
    capacity: u32,
    registered_count: u32,
    created_at: &'static str,
    updated_at: &'static str,
}

static SEED_EVENTS: [SeedEvent; 6] = [
    SeedEvent {
        id: "1",
        title: "Annual Hackathon 2025",
        description: "Join us for 24 hours of coding, innovation, and fun! Build projects that solve real-world problems.",
        category: EventCategory::Tech,
        location: "Engineering Block, Room E101",
        start_date: "2025-03-15T09:00:00",
        end_date: "2025-03-16T09:00:00",
        image_url: "https://images.pexels.com/photos/7096/people-woman-coffee-meeting.jpg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        organizer: "Computer Science Society",
        is_featured: true,
        capacity: 150,
        registered_count: 87,
        created_at: "2025-02-01T10:00:00",
        updated_at: "2025-02-05T14:30:00",
    },
    SeedEvent {
        id: "2",
        title: "Cultural Night 2025",
        description: "Experience diverse cultures through music, dance, and food. A celebration of our global campus community.",
        category: EventCategory::Culture,
        location: "University Auditorium",
        start_date: "2025-04-05T18:00:00",
        end_date: "2025-04-05T22:00:00",
        image_url: "https://images.pexels.com/photos/2695254/pexels-photo-2695254.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        organizer: "International Students Association",
        is_featured: true,
        capacity: 500,
        registered_count: 250,
        created_at: "2025-02-10T09:15:00",
        updated_at: "2025-02-12T11:20:00",
    },
    SeedEvent {
        id: "3",
        title: "Inter-College Basketball Tournament",
        description: "The annual basketball championship between neighboring colleges. Come support our team!",
        category: EventCategory::Sports,
        location: "University Sports Complex",
        start_date: "2025-03-20T10:00:00",
        end_date: "2025-03-22T17:00:00",
        image_url: "https://images.pexels.com/photos/1752757/pexels-photo-1752757.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        organizer: "Sports Department",
        is_featured: false,
        capacity: 200,
        registered_count: 180,
        created_at: "2025-02-05T14:30:00",
        updated_at: "2025-02-10T09:45:00",
    },
    SeedEvent {
        id: "4",
        title: "Photography Club Exhibition",
        description: "Annual exhibition showcasing the best photographs taken by our club members throughout the year.",
        category: EventCategory::Club,
        location: "Art Gallery, Cultural Center",
        start_date: "2025-04-10T10:00:00",
        end_date: "2025-04-12T18:00:00",
        image_url: "https://images.pexels.com/photos/167471/pexels-photo-167471.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        organizer: "Photography Club",
        is_featured: false,
        capacity: 100,
        registered_count: 45,
        created_at: "2025-02-20T11:00:00",
        updated_at: "2025-02-22T15:20:00",
    },
    SeedEvent {
        id: "5",
        title: "Resume Building Workshop",
        description: "Learn how to create an impactful resume that stands out to employers. Bring your laptop and current resume.",
        category: EventCategory::Workshop,
        location: "Business School, Room B102",
        start_date: "2025-03-25T14:00:00",
        end_date: "2025-03-25T17:00:00",
        image_url: "https://images.pexels.com/photos/1181605/pexels-photo-1181605.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        organizer: "Career Development Center",
        is_featured: true,
        capacity: 50,
        registered_count: 42,
        created_at: "2025-02-15T13:00:00",
        updated_at: "2025-02-18T09:30:00",
    },
    SeedEvent {
        id: "6",
        title: "AI and Machine Learning Seminar",
        description: "Industry experts discuss the latest trends in AI and ML and their applications in various fields.",
        category: EventCategory::Tech,
        location: "Computer Science Building, Lecture Hall CS-01",
        start_date: "2025-04-15T10:00:00",
        end_date: "2025-04-15T13:00:00",
        image_url: "https://images.pexels.com/photos/8386434/pexels-photo-8386434.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        organizer: "AI Research Group",
        is_featured: false,
        capacity: 120,
        registered_count: 68,
        created_at: "2025-02-22T09:45:00",
        updated_at: "2025-02-25T14:15:00",
    },
];

// Seed timestamps are literals checked by the tests below.
fn timestamp(value: &str) -> DateTime<Utc> {
    parse_event_date(value).unwrap_or_default()
}

/// Returns the built-in campus event catalog.
pub fn seed_events() -> Vec<Event> {
    SEED_EVENTS
        .iter()
        .map(|seed| Event {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            category: seed.category,
            location: seed.location.to_string(),
            start_date: timestamp(seed.start_date),
            end_date: timestamp(seed.end_date),
            image_url: seed.image_url.to_string(),
            organizer: seed.organizer.to_string(),
            is_featured: seed.is_featured,
            capacity: seed.capacity,
            registered_count: seed.registered_count,
            created_at: timestamp(seed.created_at),
            updated_at: timestamp(seed.updated_at),
        })
        .collect()
}

/// Loads a catalog from a JSON file holding an array of events.
pub async fn load_events_file(path: impl AsRef<Path>) -> EventStoreResult<Vec<Event>> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path).await?;
    let events: Vec<Event> = serde_json::from_str(&contents)?;
    tracing::info!(path = %path.display(), count = events.len(), "Loaded seed file");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{validate_event, EventStoreError};

    #[test]
    fn test_seed_catalog_is_well_formed() {
        let events = seed_events();
        assert_eq!(events.len(), 6);

        for event in &events {
            assert!(validate_event(event).is_ok(), "seed {} invalid", event.id);
            assert!(event.created_at <= event.updated_at);
            assert_ne!(event.start_date, DateTime::<Utc>::default());
            assert!(event.registered_count <= event.capacity);
        }
    }

    #[tokio::test]
    async fn test_load_events_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, serde_json::to_string(&seed_events()[..2]).unwrap()).unwrap();

        let events = load_events_file(&path).await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].title, "Cultural Night 2025");
    }

    #[tokio::test]
    async fn test_load_events_file_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = load_events_file(&path).await.unwrap_err();
        assert!(matches!(err, EventStoreError::Serialization(_)));
    }
}
