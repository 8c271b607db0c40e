//! Middleware modules.

mod auth;

pub use auth::*;
