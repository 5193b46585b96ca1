use thiserror::Error;

#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Sign out failed: {0}")]
    SignOut(String),

    #[error("Provider unavailable: {0}")]
    Unavailable(String),
}
