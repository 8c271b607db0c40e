//! Simulated request latency.

use std::time::Duration;

/// Artificial delays applied before catalog operations resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogLatency {
    pub fetch: Duration,
    pub register: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl CatalogLatency {
    /// No delay at all.
    pub const fn none() -> Self {
        Self {
            fetch: Duration::ZERO,
            register: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }
}

impl Default for CatalogLatency {
    fn default() -> Self {
        Self {
            fetch: Duration::from_millis(1000),
            register: Duration::from_millis(800),
            create: Duration::from_millis(1000),
            update: Duration::from_millis(800),
            delete: Duration::from_millis(800),
        }
    }
}
