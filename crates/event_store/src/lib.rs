//! Event catalog storage and queries for Campus Events
//!
//! This crate provides the event catalog store abstraction with an in-memory
//! implementation, the built-in seed catalog, event form validation, and the
//! stateless query layer (search, category filter, sort, capacity).

mod error;
mod latency;
mod memory;
pub mod query;
mod seed;
mod traits;
mod validation;

pub use error::*;
pub use latency::*;
pub use memory::*;
pub use seed::*;
pub use traits::*;
pub use validation::*;
