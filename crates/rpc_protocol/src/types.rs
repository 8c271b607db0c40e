//! Shared payload types.

use entities::Event;
use event_store::query::{capacity_percentage, CapacityBand};
use serde::{Deserialize, Serialize};

/// An event together with its derived capacity display fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    pub capacity_percentage: u8,
    pub capacity_band: CapacityBand,
    pub capacity_color: String,
    pub is_full: bool,
}

impl From<Event> for EventDetail {
    fn from(event: Event) -> Self {
        let percentage = capacity_percentage(event.registered_count, event.capacity);
        let band = CapacityBand::from_percentage(percentage);
        Self {
            capacity_percentage: percentage,
            capacity_band: band,
            capacity_color: band.color().to_string(),
            is_full: event.is_full(),
            event,
        }
    }
}
