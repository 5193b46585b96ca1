use thiserror::Error;

use crate::cookies::CookieError;
use crate::gateway::GatewayError;
use crate::store::StorageError;

/// Errors surfaced by the session coordinator
#[derive(Debug, Error, Clone)]
pub enum CoordinatorError {
    /// Auth gateway could not be reached or refused the request
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Session store call failed
    #[error("Session store error: {0}")]
    Storage(#[from] StorageError),

    /// Cookie jar read or write failed
    #[error("Cookie error: {0}")]
    Cookie(#[from] CookieError),
}

impl CoordinatorError {
    /// Log the error and return self
    pub fn log(self) -> Self {
        match &self {
            Self::Gateway(err) => tracing::error!("Gateway error: {}", err),
            Self::Storage(err) => tracing::error!("Session store error: {}", err),
            Self::Cookie(err) => tracing::error!("Cookie error: {}", err),
        }
        self
    }
}
