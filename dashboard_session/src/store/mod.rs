mod config;
mod errors;
mod memory;
mod redis;
mod types;

pub use config::{SessionStoreConfig, SessionStoreType, build_session_store};
pub use errors::StorageError;
pub use types::{InMemorySessionStore, RedisSessionStore, SessionRecord, SessionStore};
