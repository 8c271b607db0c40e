//! Durable key-value storage for the current session
//!
//! Supports both in-memory (for testing) and file-backed storage. The file
//! backend keeps one file per key inside a data directory.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::{AuthError, AuthResult};

/// Trait for durable key-value storage
#[async_trait]
pub trait SessionPersistence: Send + Sync {
    /// Read the value stored under `key`
    async fn load(&self, key: &str) -> AuthResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn save(&self, key: &str, value: &str) -> AuthResult<()>;

    /// Remove `key`; removing a missing key is not an error
    async fn remove(&self, key: &str) -> AuthResult<()>;
}

/// In-memory storage (for testing)
#[derive(Debug, Default)]
pub struct MemorySessionPersistence {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionPersistence {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one entry already present
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::default();
        if let Ok(mut entries) = store.entries.write() {
            entries.insert(key.into(), value.into());
        }
        store
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> AuthError {
    AuthError::Storage(format!("Lock poisoned: {}", e))
}

#[async_trait]
impl SessionPersistence for MemorySessionPersistence {
    async fn load(&self, key: &str) -> AuthResult<Option<String>> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> AuthResult<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AuthResult<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// File-backed storage rooted at a data directory
#[derive(Debug, Clone)]
pub struct FileSessionPersistence {
    dir: PathBuf,
}

impl FileSessionPersistence {
    /// Create a store under `dir`; the directory is created on first save
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The data directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl SessionPersistence for FileSessionPersistence {
    async fn load(&self, key: &str) -> AuthResult<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, key: &str, value: &str) -> AuthResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.path_for(key), value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> AuthResult<()> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_round_trip() {
        let store = MemorySessionPersistence::new();

        assert!(store.load("k").await.unwrap().is_none());
        store.save("k", "v").await.unwrap();
        assert_eq!(store.load("k").await.unwrap().as_deref(), Some("v"));
        store.remove("k").await.unwrap();
        store.remove("k").await.unwrap();
        assert!(store.load("k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_store_creates_directory_and_removes() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileSessionPersistence::new(tmp.path().join("nested"));

        assert!(store.load("session").await.unwrap().is_none());

        store.save("session", "{\"id\":\"1\"}").await.unwrap();
        assert!(store.dir().join("session.json").exists());
        assert_eq!(
            store.load("session").await.unwrap().as_deref(),
            Some("{\"id\":\"1\"}")
        );

        store.remove("session").await.unwrap();
        store.remove("session").await.unwrap();
        assert!(store.load("session").await.unwrap().is_none());
    }
}
