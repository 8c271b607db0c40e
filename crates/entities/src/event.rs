//! Event entity definitions.

use std::{fmt, str::FromStr};

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::new_record_id;

/// Classification of a campus event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    /// Technology talks and hackathons.
    Tech,
    /// Cultural festivals and performances.
    Culture,
    /// Sports fixtures.
    Sports,
    /// Student club activities.
    Club,
    /// Hands-on workshops.
    Workshop,
}

impl EventCategory {
    /// Every category, in display order.
    pub const ALL: [EventCategory; 5] = [
        EventCategory::Tech,
        EventCategory::Culture,
        EventCategory::Sports,
        EventCategory::Club,
        EventCategory::Workshop,
    ];

    /// Returns the wire name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tech => "tech",
            Self::Culture => "culture",
            Self::Sports => "sports",
            Self::Club => "club",
            Self::Workshop => "workshop",
        }
    }

    /// Returns the title used when listing a category.
    pub fn display_title(&self) -> &'static str {
        match self {
            Self::Tech => "Tech Town",
            Self::Culture => "Culture Circle",
            Self::Sports => "Sports Street",
            Self::Club => "Club Central",
            Self::Workshop => "Workshop Lane",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for EventCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// A campus event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier.
    pub id: String,
    /// Title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Category.
    pub category: EventCategory,
    /// Where the event takes place.
    pub location: String,
    /// When the event starts.
    pub start_date: DateTime<Utc>,
    /// When the event ends.
    pub end_date: DateTime<Utc>,
    /// Cover image.
    pub image_url: String,
    /// Organizing body.
    pub organizer: String,
    /// Whether the event is promoted on the home page.
    pub is_featured: bool,
    /// Maximum number of registrations.
    pub capacity: u32,
    /// Registrations so far. Expected, but not guaranteed, to stay within
    /// `capacity`.
    pub registered_count: u32,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
    /// When this record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Creates a new event from a draft with a random id and no registrations.
    pub fn from_draft(draft: EventDraft) -> Self {
        let now = Utc::now();
        Self {
            id: new_record_id(),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            location: draft.location,
            start_date: draft.start_date,
            end_date: draft.end_date,
            image_url: draft.image_url,
            organizer: draft.organizer,
            is_featured: draft.is_featured,
            capacity: draft.capacity,
            registered_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true once registrations have reached capacity.
    pub fn is_full(&self) -> bool {
        self.registered_count >= self.capacity
    }

    /// Merges the supplied fields of `patch` into this event.
    ///
    /// Does not touch `updated_at`; see [`Event::touch`].
    pub fn apply(&mut self, patch: EventPatch) {
        let EventPatch {
            title,
            description,
            category,
            location,
            start_date,
            end_date,
            image_url,
            organizer,
            is_featured,
            capacity,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(start_date) = start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = end_date {
            self.end_date = end_date;
        }
        if let Some(image_url) = image_url {
            self.image_url = image_url;
        }
        if let Some(organizer) = organizer {
            self.organizer = organizer;
        }
        if let Some(is_featured) = is_featured {
            self.is_featured = is_featured;
        }
        if let Some(capacity) = capacity {
            self.capacity = capacity;
        }
    }

    /// Returns a copy of this event with `patch` merged in.
    pub fn merged(&self, patch: &EventPatch) -> Self {
        let mut event = self.clone();
        event.apply(patch.clone());
        event
    }

    /// Bumps `updated_at` to now, always moving it strictly forward.
    pub fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + TimeDelta::microseconds(1)
        };
    }
}

/// Fields supplied when creating an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    pub location: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub image_url: String,
    pub organizer: String,
    pub is_featured: bool,
    pub capacity: u32,
}

/// A partial update to an event. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<EventCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}
