use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum CookieError {
    #[error("Cookie error: {0}")]
    Cookie(String),

    #[error("Cookie jar unavailable: {0}")]
    Unavailable(String),

    #[error("Header error: {0}")]
    HeaderError(String),
}
