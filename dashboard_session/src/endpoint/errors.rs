use thiserror::Error;

use crate::cookies::CookieError;
use crate::provider::ProviderError;
use crate::store::StorageError;

/// Failures inside the server-side auth flows
#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Cookie error: {0}")]
    Cookie(#[from] CookieError),
}

impl EndpointError {
    /// Log the error and return self
    pub fn log(self) -> Self {
        match &self {
            Self::Storage(err) => tracing::error!("Storage error: {}", err),
            Self::Provider(err) => tracing::error!("Provider error: {}", err),
            Self::Cookie(err) => tracing::error!("Cookie error: {}", err),
        }
        self
    }
}
