//! Session and credential management for Campus Events.
//!
//! This crate provides:
//! - An in-memory credential store seeded with the demo accounts
//! - The session store: login, signup, logout and session restore
//! - Durable key-value persistence for the current session
//! - Login and signup form checks

mod credential_store;
mod error;
mod forms;
mod persistence;
mod session;
mod user;

pub use credential_store::*;
pub use error::*;
pub use forms::*;
pub use persistence::*;
pub use session::*;
pub use user::*;

/// Storage key holding the serialized current identity.
pub const SESSION_KEY: &str = "campusBuzzUser";

/// Minimum accepted password length at signup.
pub const MIN_PASSWORD_LEN: usize = 6;
