//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No identity matches the email and password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Signup with an email that is already registered.
    #[error("Email already in use")]
    EmailInUse,

    /// A required form field is empty.
    #[error("Please fill in all fields")]
    MissingFields,

    /// Signup password below the minimum length.
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    /// The persisted session could not be parsed and was discarded.
    #[error("Stored session is corrupt: {0}")]
    CorruptSession(String),

    /// Durable storage failed.
    #[error("Session storage error: {0}")]
    Storage(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;
