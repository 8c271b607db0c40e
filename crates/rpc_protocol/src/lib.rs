//! JSON protocol definitions for Campus Events server/client communication
//!
//! This crate defines the request, response, and error shapes exchanged
//! between the Campus Events server and its clients.

mod error;
pub mod requests;
pub mod responses;
mod types;

pub use error::*;
pub use types::*;
