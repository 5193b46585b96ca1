use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use redis::{self, AsyncCommands};

use super::errors::StorageError;
use super::types::{RedisSessionStore, SessionRecord, SessionStore};

const SESSION_PREFIX: &str = "session";

/// Bump `last_active_at` only while the record is still active.
///
/// KEYS[1] = session key
/// ARGV[1] = RFC 3339 timestamp
/// ARGV[2] = ttl in seconds
///
/// Returns 1 when the record was touched, 0 when absent or ended.
const TOUCH_SCRIPT: &str = r#"
    local raw = redis.call('GET', KEYS[1])
    if not raw then
        return 0
    end
    local record = cjson.decode(raw)
    if not record.active then
        return 0
    end
    record.last_active_at = ARGV[1]
    redis.call('SET', KEYS[1], cjson.encode(record), 'EX', ARGV[2])
    return 1
"#;

/// Mark the record inactive.
///
/// KEYS[1] = session key
/// ARGV[1] = ttl in seconds
///
/// Returns 1 when the record was ended, 0 when absent or already ended.
const END_SCRIPT: &str = r#"
    local raw = redis.call('GET', KEYS[1])
    if not raw then
        return 0
    end
    local record = cjson.decode(raw)
    if not record.active then
        return 0
    end
    record.active = false
    redis.call('SET', KEYS[1], cjson.encode(record), 'EX', ARGV[1])
    return 1
"#;

impl RedisSessionStore {
    /// `ttl_secs` must be positive and fit in a redis `EX` argument.
    pub fn new(client: redis::Client, ttl_secs: u64) -> Result<Self, StorageError> {
        let ttl = i64::try_from(ttl_secs)
            .ok()
            .filter(|ttl| *ttl > 0)
            .ok_or_else(|| {
                StorageError::Config(format!("Invalid session TTL: {ttl_secs} seconds"))
            })?;
        Ok(Self { client, ttl })
    }

    fn make_key(email: &str) -> String {
        format!("{SESSION_PREFIX}:{email}")
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn init(&self) -> Result<(), StorageError> {
        // Verify the connection works
        let _conn = self.client.get_multiplexed_async_connection().await?;
        Ok(())
    }

    async fn start_session(&self, email: &str) -> Result<SessionRecord, StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let record = SessionRecord::started_now(email);
        let key = Self::make_key(email);
        let value = serde_json::to_string(&record)?;
        let _: () = conn.set_ex(&key, value, self.ttl.unsigned_abs()).await?;
        Ok(record)
    }

    async fn update_last_active(&self, email: &str) -> Result<(), StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::AutoSi, true);
        let touched: i64 = redis::Script::new(TOUCH_SCRIPT)
            .key(Self::make_key(email))
            .arg(now)
            .arg(self.ttl)
            .invoke_async(&mut conn)
            .await?;
        if touched == 0 {
            tracing::trace!("No active session to touch for {}", email);
        }
        Ok(())
    }

    async fn end_session(&self, email: &str) -> Result<(), StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let ended: i64 = redis::Script::new(END_SCRIPT)
            .key(Self::make_key(email))
            .arg(self.ttl)
            .invoke_async(&mut conn)
            .await?;
        if ended == 0 {
            tracing::debug!("Session for {} was absent or already ended", email);
        }
        Ok(())
    }

    async fn get_session(&self, email: &str) -> Result<Option<SessionRecord>, StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(Self::make_key(email)).await?;
        match value {
            Some(v) => Ok(Some(serde_json::from_str(&v)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn client() -> redis::Client {
        redis::Client::open("redis://127.0.0.1:6379").unwrap()
    }

    /// Store against `TEST_REDIS_URL`, or `None` when no server is configured
    async fn live_store() -> Option<RedisSessionStore> {
        let url = std::env::var("TEST_REDIS_URL").ok()?;
        let store = RedisSessionStore::new(redis::Client::open(url).ok()?, 60).ok()?;
        store.init().await.ok()?;
        Some(store)
    }

    #[test]
    fn test_make_key() {
        assert_eq!(
            RedisSessionStore::make_key("ivy@example.com"),
            "session:ivy@example.com"
        );
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = SessionRecord::started_now("jack@example.com");
        let json = serde_json::to_string(&record).unwrap();
        let parsed: SessionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_script_timestamp_parses_as_record_field() {
        let now = Utc::now();
        let json = format!(
            r#"{{"email":"a@example.com","started_at":"{0}","last_active_at":"{0}","active":true}}"#,
            now.to_rfc3339_opts(SecondsFormat::AutoSi, true)
        );
        let record: SessionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.last_active_at, now);
    }

    #[test]
    fn test_ttl_must_be_positive() {
        assert!(matches!(
            RedisSessionStore::new(client(), 0),
            Err(StorageError::Config(_))
        ));
        assert_eq!(RedisSessionStore::new(client(), 600).unwrap().ttl, 600);
    }

    #[test]
    fn test_ttl_must_fit_i64() {
        let result = RedisSessionStore::new(client(), u64::MAX);
        assert!(matches!(result, Err(StorageError::Config(_))));
    }

    #[tokio::test]
    async fn test_touch_racing_end_never_revives_session() {
        let Some(store) = live_store().await else {
            eprintln!("TEST_REDIS_URL not set, skipping");
            return;
        };
        let store = Arc::new(store);
        let email = "race@example.com";
        store.start_session(email).await.unwrap();

        let touches: Vec<_> = (0..20)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.update_last_active(email).await })
            })
            .collect();
        store.end_session(email).await.unwrap();
        for touch in touches {
            touch.await.unwrap().unwrap();
        }

        let record = store.get_session(email).await.unwrap().unwrap();
        assert!(!record.active);
    }
}
