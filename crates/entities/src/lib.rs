//! Core entity definitions for Campus Events.
//!
//! This crate defines the records shared across the Campus Events
//! application: identities, events, event categories, and the draft and
//! patch shapes used to create and edit events.

mod event;
mod id;
mod latency;
mod user;

pub use event::*;
pub use id::*;
pub use latency::*;
pub use user::*;
