//! Event form validation.
//!
//! Form data arrives as raw strings and is checked field by field before any
//! store mutation. The first failing check wins.

use chrono::{DateTime, NaiveDateTime, Utc};
use entities::{Event, EventCategory, EventDraft};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A field-level check failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is blank.
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Start date is invalid")]
    InvalidStartDate,

    #[error("End date is invalid")]
    InvalidEndDate,

    #[error("End date must be after start date")]
    EndNotAfterStart,

    #[error("Capacity must be greater than 0")]
    NonPositiveCapacity,

    #[error("Capacity must be at most {}", u32::MAX)]
    CapacityTooLarge,
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parses an RFC 3339 timestamp or a zone-less `YYYY-MM-DDTHH:MM[:SS]`
/// timestamp, which is taken as UTC.
pub fn parse_event_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Some(date.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|naive| naive.and_utc())
}

/// Event data as submitted from the create/edit form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub image_url: String,
    pub organizer: String,
    #[serde(default)]
    pub is_featured: bool,
    pub capacity: i64,
}

impl EventForm {
    /// Checks every field and converts the form into a draft.
    pub fn validate(&self) -> Result<EventDraft, ValidationError> {
        require("Title", &self.title)?;
        require("Description", &self.description)?;
        require("Location", &self.location)?;
        require("Organizer", &self.organizer)?;
        require("Image URL", &self.image_url)?;

        let start_date =
            parse_event_date(&self.start_date).ok_or(ValidationError::InvalidStartDate)?;
        let end_date = parse_event_date(&self.end_date).ok_or(ValidationError::InvalidEndDate)?;
        if end_date <= start_date {
            return Err(ValidationError::EndNotAfterStart);
        }

        if self.capacity <= 0 {
            return Err(ValidationError::NonPositiveCapacity);
        }
        let capacity =
            u32::try_from(self.capacity).map_err(|_| ValidationError::CapacityTooLarge)?;

        Ok(EventDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category,
            location: self.location.clone(),
            start_date,
            end_date,
            image_url: self.image_url.clone(),
            organizer: self.organizer.clone(),
            is_featured: self.is_featured,
            capacity,
        })
    }
}

/// Applies the form checks to a complete event, such as the result of
/// merging a patch into a stored event.
pub fn validate_event(event: &Event) -> Result<(), ValidationError> {
    require("Title", &event.title)?;
    require("Description", &event.description)?;
    require("Location", &event.location)?;
    require("Organizer", &event.organizer)?;
    require("Image URL", &event.image_url)?;
    if event.end_date <= event.start_date {
        return Err(ValidationError::EndNotAfterStart);
    }
    if event.capacity == 0 {
        return Err(ValidationError::NonPositiveCapacity);
    }
    Ok(())
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(())
    }
}
