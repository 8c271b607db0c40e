//! Identity entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::new_record_id;

/// An identity as exposed to the rest of the system.
///
/// Never carries a password; credentials are kept by the credential store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier.
    pub id: String,
    /// Email address, unique across identities.
    pub email: String,
    /// Display name.
    pub display_name: String,
    /// Whether this identity may use the admin dashboard.
    pub is_admin: bool,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new non-admin user with a random id.
    pub fn new(email: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            email: email.into(),
            display_name: display_name.into(),
            is_admin: false,
            created_at: Utc::now(),
        }
    }

    /// Overrides the generated id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Grants or revokes admin privileges.
    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }
}
