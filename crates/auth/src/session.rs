//! The session store: zero or one signed-in identity.

use std::sync::Arc;
use std::time::Duration;

use entities::{simulate_latency, User};
use tokio::sync::RwLock;

use crate::{
    AuthError, AuthResult, CredentialStore, SessionPersistence, UserCredential, SESSION_KEY,
};

/// Artificial delays applied before session operations resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLatency {
    pub login: Duration,
    pub signup: Duration,
    pub logout: Duration,
}

impl SessionLatency {
    /// No delay at all.
    pub const fn none() -> Self {
        Self {
            login: Duration::ZERO,
            signup: Duration::ZERO,
            logout: Duration::ZERO,
        }
    }
}

impl Default for SessionLatency {
    fn default() -> Self {
        Self {
            login: Duration::from_millis(800),
            signup: Duration::from_millis(800),
            logout: Duration::from_millis(500),
        }
    }
}

/// Holds the current identity and mirrors it to durable storage.
///
/// Writes to durable storage are best effort: a failed write is logged and
/// the in-memory session still changes.
pub struct SessionStore {
    credentials: Arc<dyn CredentialStore>,
    persistence: Arc<dyn SessionPersistence>,
    current: RwLock<Option<User>>,
    latency: SessionLatency,
}

impl SessionStore {
    /// Creates a signed-out session store with no simulated latency.
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        persistence: Arc<dyn SessionPersistence>,
    ) -> Self {
        Self {
            credentials,
            persistence,
            current: RwLock::new(None),
            latency: SessionLatency::none(),
        }
    }

    /// Sets the simulated latency.
    pub fn with_latency(mut self, latency: SessionLatency) -> Self {
        self.latency = latency;
        self
    }

    /// Restores a previously persisted identity.
    ///
    /// Returns `Ok(None)` when nothing was stored. An entry that does not
    /// parse is removed and reported as [`AuthError::CorruptSession`]; the
    /// session stays signed out and the store remains usable.
    pub async fn restore(&self) -> AuthResult<Option<User>> {
        let Some(raw) = self.persistence.load(SESSION_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "Restored session");
                *self.current.write().await = Some(user.clone());
                Ok(Some(user))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable stored session");
                self.persistence.remove(SESSION_KEY).await?;
                Err(AuthError::CorruptSession(e.to_string()))
            }
        }
    }

    /// Returns the signed-in identity, if any.
    pub async fn current(&self) -> Option<User> {
        self.current.read().await.clone()
    }

    /// Returns true if someone is signed in.
    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Signs in with an exact email and password match.
    ///
    /// On failure the current identity is left as it was.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<User> {
        simulate_latency(self.latency.login).await;

        let user = self
            .credentials
            .authenticate(email, password)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        tracing::info!(user_id = %user.id, is_admin = user.is_admin, "User logged in");
        self.establish(user).await
    }

    /// Registers a new non-admin identity and signs it in.
    ///
    /// Fails with [`AuthError::EmailInUse`] if the email is taken, leaving the
    /// current identity as it was.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> AuthResult<User> {
        simulate_latency(self.latency.signup).await;

        let user = self
            .credentials
            .insert(UserCredential::new(User::new(email, display_name), password))
            .await?;

        tracing::info!(user_id = %user.id, "User signed up");
        self.establish(user).await
    }

    /// Signs out and clears the stored session.
    pub async fn logout(&self) {
        simulate_latency(self.latency.logout).await;

        let previous = self.current.write().await.take();
        if let Err(e) = self.persistence.remove(SESSION_KEY).await {
            tracing::warn!(error = %e, "Failed to clear stored session");
        }

        if let Some(user) = previous {
            tracing::info!(user_id = %user.id, "User logged out");
        }
    }

    async fn establish(&self, user: User) -> AuthResult<User> {
        let serialized = serde_json::to_string(&user)?;
        if let Err(e) = self.persistence.save(SESSION_KEY, &serialized).await {
            tracing::warn!(error = %e, "Failed to persist session");
        }
        *self.current.write().await = Some(user.clone());
        Ok(user)
    }
}
