//! Credential storage
//!
//! Holds identities together with their passwords. The in-memory store is the
//! only backend; it starts from the demo accounts.

use std::sync::RwLock;

use async_trait::async_trait;
use entities::User;

use crate::{seed_credentials, AuthError, AuthResult, UserCredential};

/// Trait for credential storage
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find the identity matching both email and password exactly
    ///
    /// The returned identity carries no password.
    async fn authenticate(&self, email: &str, password: &str) -> AuthResult<Option<User>>;

    /// Find an identity by email
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>>;

    /// Store a new credential
    ///
    /// Fails with [`AuthError::EmailInUse`] if the email is taken. The check
    /// and the insert happen under one lock.
    async fn insert(&self, credential: UserCredential) -> AuthResult<User>;
}

/// In-memory credential store
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    credentials: RwLock<Vec<UserCredential>>,
}

impl MemoryCredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the demo accounts
    pub fn seeded() -> Self {
        Self {
            credentials: RwLock::new(seed_credentials()),
        }
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> AuthError {
    AuthError::Storage(format!("Lock poisoned: {}", e))
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn authenticate(&self, email: &str, password: &str) -> AuthResult<Option<User>> {
        let credentials = self.credentials.read().map_err(poisoned)?;
        Ok(credentials
            .iter()
            .find(|c| c.matches(email, password))
            .map(|c| c.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        let credentials = self.credentials.read().map_err(poisoned)?;
        Ok(credentials
            .iter()
            .find(|c| c.user.email == email)
            .map(|c| c.user.clone()))
    }

    async fn insert(&self, credential: UserCredential) -> AuthResult<User> {
        let mut credentials = self.credentials.write().map_err(poisoned)?;
        if credentials
            .iter()
            .any(|c| c.user.email == credential.user.email)
        {
            return Err(AuthError::EmailInUse);
        }
        let user = credential.user.clone();
        credentials.push(credential);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_authenticate() {
        let store = MemoryCredentialStore::seeded();

        let admin = store
            .authenticate("admin123@gmail.com", "admin123")
            .await
            .unwrap()
            .unwrap();
        assert!(admin.is_admin);
        assert_eq!(admin.id, "1");

        assert!(store
            .authenticate("admin123@gmail.com", "wrong")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_email() {
        let store = MemoryCredentialStore::new();

        store
            .insert(UserCredential::new(User::new("a@b.com", "A"), "secret1"))
            .await
            .unwrap();
        let err = store
            .insert(UserCredential::new(User::new("a@b.com", "B"), "other"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::EmailInUse));
        let stored = store.find_by_email("a@b.com").await.unwrap().unwrap();
        assert_eq!(stored.display_name, "A");
    }

    #[tokio::test]
    async fn test_emails_stay_unique_after_many_signups() {
        let store = MemoryCredentialStore::seeded();
        let emails = ["x@y.com", "user@campusbuzz.com", "x@y.com", "z@y.com", "z@y.com"];

        for (i, email) in emails.iter().enumerate() {
            let _ = store
                .insert(UserCredential::new(User::new(*email, format!("U{i}")), "secret1"))
                .await;
        }

        let credentials = store.credentials.read().unwrap();
        let mut seen: Vec<&str> = credentials.iter().map(|c| c.user.email.as_str()).collect();
        let total = seen.len();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), total);
        assert_eq!(total, 4);
    }
}
