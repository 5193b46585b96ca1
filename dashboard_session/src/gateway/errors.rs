use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum GatewayError {
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    #[error("HTTP status error: {0}")]
    HttpStatusError(http::StatusCode),

    #[error("JSON parsing failed: {0}")]
    JsonError(String),

    #[error("Invalid gateway URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::JsonError(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

impl From<url::ParseError> for GatewayError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let error = GatewayError::HttpStatusError(http::StatusCode::BAD_GATEWAY);
        assert_eq!(error.to_string(), "HTTP status error: 502 Bad Gateway");
    }

    #[test]
    fn test_from_url_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        assert!(matches!(GatewayError::from(err), GatewayError::InvalidUrl(_)));
    }
}
