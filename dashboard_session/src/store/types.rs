use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::Mutex;

use super::errors::StorageError;

/// Liveness record kept per user email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub email: String,
    pub started_at: DateTime<Utc>,
    pub last_active_at: DateTime<Utc>,
    pub active: bool,
}

impl SessionRecord {
    pub(crate) fn started_now(email: &str) -> Self {
        let now = Utc::now();
        Self {
            email: email.to_string(),
            started_at: now,
            last_active_at: now,
            active: true,
        }
    }
}

/// Persistent record of session liveness, keyed by email.
///
/// Ending an absent or already-ended session succeeds without effect, and so
/// does touching one.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Verify the backend is reachable.
    async fn init(&self) -> Result<(), StorageError>;

    /// Create (or replace) an active record for `email`.
    async fn start_session(&self, email: &str) -> Result<SessionRecord, StorageError>;

    /// Bump `last_active_at` on an active record.
    async fn update_last_active(&self, email: &str) -> Result<(), StorageError>;

    /// Invalidate the record for `email`.
    async fn end_session(&self, email: &str) -> Result<(), StorageError>;

    async fn get_session(&self, email: &str) -> Result<Option<SessionRecord>, StorageError>;
}

pub struct InMemorySessionStore {
    pub(super) entry: Mutex<HashMap<String, SessionRecord>>,
}

pub struct RedisSessionStore {
    pub(super) client: redis::Client,
    /// Seconds, always positive
    pub(super) ttl: i64,
}
