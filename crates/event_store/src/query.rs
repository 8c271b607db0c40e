//! Stateless queries over event lists: search, category filter, sort, and
//! capacity display helpers.

use std::{cmp::Ordering, fmt, str::FromStr};

use entities::{Event, EventCategory, ParseCategoryError};
use serde::{Deserialize, Serialize};

/// Category selection with an `all` pass-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(EventCategory),
}

impl CategoryFilter {
    /// Returns true if `event` passes the selection.
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => event.category == *category,
        }
    }

    /// Returns the heading for a listing under this selection.
    pub fn title(&self) -> &'static str {
        match self {
            Self::All => "All Events",
            Self::Only(category) => category.display_title(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = ParseCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}

/// Which fields a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    /// Title, description, and organizer.
    #[default]
    Catalog,
    /// The catalog fields plus the category name, as on the admin dashboard.
    Admin,
}

/// Case-insensitive substring match of `term` against the scoped fields.
/// An empty term matches everything.
pub fn matches_search(event: &Event, term: &str, scope: SearchScope) -> bool {
    let term = term.to_lowercase();
    let contains = |field: &str| field.to_lowercase().contains(&term);

    contains(&event.title)
        || contains(&event.description)
        || contains(&event.organizer)
        || (scope == SearchScope::Admin && contains(event.category.as_str()))
}

/// Field an event list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Title,
    Category,
    StartDate,
    RegisteredCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// A single-key sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    #[serde(default)]
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::ascending(SortKey::StartDate)
    }
}

impl SortSpec {
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }

    /// Returns the order after a user selects `key`: the active ascending
    /// key flips to descending, anything else starts ascending.
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key && self.direction == SortDirection::Ascending {
            Self::descending(key)
        } else {
            Self::ascending(key)
        }
    }

    /// Compares two events under this order.
    pub fn compare(&self, a: &Event, b: &Event) -> Ordering {
        let ordering = match self.key {
            SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortKey::Category => a.category.as_str().cmp(b.category.as_str()),
            SortKey::StartDate => a.start_date.cmp(&b.start_date),
            SortKey::RegisteredCount => a.registered_count.cmp(&b.registered_count),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Sorts `events` in place. Equal keys keep their relative order.
    pub fn sort(&self, events: &mut [Event]) {
        events.sort_by(|a, b| self.compare(a, b));
    }
}

/// A combined search, category, and sort query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default)]
    pub scope: SearchScope,
    #[serde(default)]
    pub sort: Option<SortSpec>,
}

impl EventQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn sorted_by(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Returns true if `event` matches both the search and the category.
    pub fn matches(&self, event: &Event) -> bool {
        matches_search(event, &self.search, self.scope) && self.category.matches(event)
    }

    /// Filters and, if requested, sorts `events`. Without a sort the input
    /// order is kept.
    pub fn apply(&self, events: impl IntoIterator<Item = Event>) -> Vec<Event> {
        let mut result: Vec<Event> = events.into_iter().filter(|e| self.matches(e)).collect();
        if let Some(sort) = &self.sort {
            sort.sort(&mut result);
        }
        result
    }
}

/// Fill level of an event, as a whole percentage clamped to 100.
pub fn capacity_percentage(registered_count: u32, capacity: u32) -> u8 {
    if capacity == 0 {
        return 100;
    }
    let ratio = (f64::from(registered_count) / f64::from(capacity)).min(1.0);
    (ratio * 100.0).round() as u8
}

/// Display band for a fill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityBand {
    /// Below 70%.
    Open,
    /// 70% up to 90%.
    Filling,
    /// 90% and above.
    Critical,
}

impl CapacityBand {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            90.. => Self::Critical,
            70..=89 => Self::Filling,
            _ => Self::Open,
        }
    }

    pub fn for_event(event: &Event) -> Self {
        Self::from_percentage(capacity_percentage(event.registered_count, event.capacity))
    }

    /// Conventional display colour of the band.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Open => "green",
            Self::Filling => "orange",
            Self::Critical => "red",
        }
    }
}
