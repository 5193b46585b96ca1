use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum StorageError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Json conversion(Serde) error: {0}")]
    Serde(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<redis::RedisError> for StorageError {
    fn from(err: redis::RedisError) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        // Given a StorageError with a Storage variant
        let error = StorageError::Storage("Connection failed".to_string());

        // When converting to a string
        let error_string = error.to_string();

        // Then it should format correctly
        assert_eq!(error_string, "Storage error: Connection failed");
    }

    #[test]
    fn test_from_redis_error() {
        let redis_error =
            redis::RedisError::from((redis::ErrorKind::IoError, "Connection refused"));

        let storage_error = StorageError::from(redis_error);

        match storage_error {
            StorageError::Storage(msg) => assert!(msg.contains("Connection refused")),
            _ => panic!("Expected Storage variant"),
        }
    }

    #[test]
    fn test_from_serde_error() {
        let serde_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();

        let storage_error = StorageError::from(serde_error);

        assert!(matches!(storage_error, StorageError::Serde(_)));
    }

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<StorageError>();
    }
}
