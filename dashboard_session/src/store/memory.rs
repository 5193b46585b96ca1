use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::Mutex;

use super::errors::StorageError;
use super::types::{InMemorySessionStore, SessionRecord, SessionStore};

impl InMemorySessionStore {
    pub fn new() -> Self {
        tracing::info!("Creating new in-memory session store");
        Self {
            entry: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn init(&self) -> Result<(), StorageError> {
        Ok(()) // Nothing to initialize for in-memory store
    }

    async fn start_session(&self, email: &str) -> Result<SessionRecord, StorageError> {
        let record = SessionRecord::started_now(email);
        self.entry
            .lock()
            .await
            .insert(email.to_string(), record.clone());
        Ok(record)
    }

    async fn update_last_active(&self, email: &str) -> Result<(), StorageError> {
        if let Some(record) = self.entry.lock().await.get_mut(email) {
            if record.active {
                record.last_active_at = Utc::now();
            }
        }
        Ok(())
    }

    async fn end_session(&self, email: &str) -> Result<(), StorageError> {
        if let Some(record) = self.entry.lock().await.get_mut(email) {
            record.active = false;
        }
        Ok(())
    }

    async fn get_session(&self, email: &str) -> Result<Option<SessionRecord>, StorageError> {
        Ok(self.entry.lock().await.get(email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init() {
        let store = InMemorySessionStore::new();
        assert!(store.init().await.is_ok());
    }

    #[tokio::test]
    async fn test_start_and_get() {
        // Given an in-memory store
        let store = InMemorySessionStore::new();

        // When a session is started
        let started = store.start_session("erin@example.com").await.unwrap();

        // Then it can be read back as active
        let record = store.get_session("erin@example.com").await.unwrap().unwrap();
        assert_eq!(record, started);
        assert!(record.active);
        assert_eq!(record.started_at, record.last_active_at);
    }

    #[tokio::test]
    async fn test_update_last_active_moves_forward() {
        let store = InMemorySessionStore::new();
        let started = store.start_session("frank@example.com").await.unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        store.update_last_active("frank@example.com").await.unwrap();

        let record = store.get_session("frank@example.com").await.unwrap().unwrap();
        assert!(record.last_active_at > started.last_active_at);
        assert_eq!(record.started_at, started.started_at);
    }

    #[tokio::test]
    async fn test_end_session_is_idempotent() {
        // Given an active session
        let store = InMemorySessionStore::new();
        store.start_session("gina@example.com").await.unwrap();

        // When it is ended twice
        store.end_session("gina@example.com").await.unwrap();
        store.end_session("gina@example.com").await.unwrap();

        // Then the record is inactive and no error surfaced
        let record = store.get_session("gina@example.com").await.unwrap().unwrap();
        assert!(!record.active);
    }

    #[tokio::test]
    async fn test_absent_records_are_noops() {
        let store = InMemorySessionStore::new();
        assert!(store.end_session("nobody@example.com").await.is_ok());
        assert!(store.update_last_active("nobody@example.com").await.is_ok());
        assert!(store.get_session("nobody@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_activity_does_not_revive_ended_session() {
        let store = InMemorySessionStore::new();
        store.start_session("hank@example.com").await.unwrap();
        store.end_session("hank@example.com").await.unwrap();
        let ended = store.get_session("hank@example.com").await.unwrap().unwrap();

        store.update_last_active("hank@example.com").await.unwrap();

        let record = store.get_session("hank@example.com").await.unwrap().unwrap();
        assert!(!record.active);
        assert_eq!(record.last_active_at, ended.last_active_at);
    }
}
