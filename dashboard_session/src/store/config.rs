use std::env;
use std::sync::Arc;

use super::errors::StorageError;
use super::types::{InMemorySessionStore, RedisSessionStore, SessionStore};

const DEFAULT_SESSION_TTL_SECS: u64 = 86400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStoreType {
    Memory,
    Redis,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStoreConfig {
    pub store_type: SessionStoreType,
    pub url: Option<String>,
    pub ttl_secs: u64,
}

impl Default for SessionStoreConfig {
    fn default() -> Self {
        Self {
            store_type: SessionStoreType::Memory,
            url: None,
            ttl_secs: DEFAULT_SESSION_TTL_SECS,
        }
    }
}

impl SessionStoreConfig {
    /// Read `SESSION_STORE_TYPE`, `SESSION_STORE_URL` and `SESSION_STORE_TTL_SECS`.
    pub fn from_env() -> Result<Self, StorageError> {
        Self::from_values(
            env::var("SESSION_STORE_TYPE").ok().as_deref(),
            env::var("SESSION_STORE_URL").ok(),
            env::var("SESSION_STORE_TTL_SECS").ok().as_deref(),
        )
    }

    fn from_values(
        store_type: Option<&str>,
        url: Option<String>,
        ttl: Option<&str>,
    ) -> Result<Self, StorageError> {
        let store_type = match store_type.unwrap_or("memory") {
            "memory" => SessionStoreType::Memory,
            "redis" => SessionStoreType::Redis,
            t => {
                return Err(StorageError::Config(format!(
                    "Unsupported session store type: {t}. Supported types are 'memory' and 'redis'"
                )));
            }
        };

        if store_type == SessionStoreType::Redis && url.is_none() {
            return Err(StorageError::Config(
                "SESSION_STORE_URL must be set for the redis session store".to_string(),
            ));
        }

        let ttl_secs = ttl
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SESSION_TTL_SECS);
        if ttl_secs == 0 || i64::try_from(ttl_secs).is_err() {
            return Err(StorageError::Config(format!(
                "SESSION_STORE_TTL_SECS must be between 1 and {}, got {ttl_secs}",
                i64::MAX
            )));
        }

        Ok(Self {
            store_type,
            url,
            ttl_secs,
        })
    }
}

/// Build and connect the configured session store.
pub async fn build_session_store(
    config: &SessionStoreConfig,
) -> Result<Arc<dyn SessionStore>, StorageError> {
    tracing::info!(
        "Initializing session store with type: {:?}, url: {:?}",
        config.store_type,
        config.url
    );

    let store: Arc<dyn SessionStore> = match config.store_type {
        SessionStoreType::Memory => Arc::new(InMemorySessionStore::new()),
        SessionStoreType::Redis => {
            let url = config.url.as_deref().ok_or_else(|| {
                StorageError::Config("Redis session store requires a URL".to_string())
            })?;
            let client = redis::Client::open(url).map_err(|e| {
                tracing::error!("Failed to create Redis client: {}", e);
                StorageError::from(e)
            })?;
            Arc::new(RedisSessionStore::new(client, config.ttl_secs)?)
        }
    };

    store.init().await.inspect_err(|e| {
        tracing::error!("Failed to connect to session store: {}", e);
    })?;

    tracing::info!("Connected to session store: type={:?}", config.store_type);
    Ok(store)
}
