use http::{HeaderMap, StatusCode};
use serde::Serialize;

use crate::gateway::{ErrorBody, LoginResponse};

/// Body of a successful logout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutSummary {
    pub message: String,
    pub cleared: Vec<String>,
    /// Whether an email was resolved and its session record ended
    pub session_ended: bool,
}

/// Body of a logout that hit an error part way
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutFailure {
    pub message: String,
    pub error: String,
    pub session_cleanup_attempted: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum EndpointBody {
    LoggedOut(LogoutSummary),
    LogoutFailed(LogoutFailure),
    LoggedIn(LoginResponse),
    Error(ErrorBody),
}

/// Framework-neutral response: status, headers to send and a JSON body.
#[derive(Debug, Clone)]
pub struct EndpointResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: EndpointBody,
}

impl EndpointResponse {
    pub(super) fn new(status: StatusCode, headers: HeaderMap, body: EndpointBody) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub(super) fn error(status: StatusCode, message: &str) -> Self {
        Self::new(
            status,
            HeaderMap::new(),
            EndpointBody::Error(ErrorBody {
                message: Some(message.to_string()),
            }),
        )
    }
}
