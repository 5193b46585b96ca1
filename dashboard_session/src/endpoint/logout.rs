use http::{HeaderMap, StatusCode};

use crate::cookies::{EMAIL_COOKIE, LOGOUT_CLEARED_COOKIES, append_expired_cookie, cookie_value};
use crate::gateway::LogoutRequest;
use crate::provider::IdentityProvider;
use crate::store::SessionStore;

use super::errors::EndpointError;
use super::types::{EndpointBody, EndpointResponse, LogoutFailure, LogoutSummary};

pub(super) const LOGOUT_SUCCESS_MESSAGE: &str = "Logout successful";
pub(super) const LOGOUT_PARTIAL_MESSAGE: &str = "Partial logout completed with errors";

/// Server side of `POST {prefix}/logout`.
///
/// Ends the session record for the acting user, signs out of the identity
/// provider and expires the logout cookie set. On failure the cookies are
/// still expired and the session end is retried on its own before a `500`
/// is returned. Method gating is left to the router.
#[tracing::instrument(skip_all)]
pub async fn handle_logout(
    store: &dyn SessionStore,
    provider: &dyn IdentityProvider,
    headers: &HeaderMap,
    body: &[u8],
) -> EndpointResponse {
    let email = resolve_email(headers, body);

    match logout(store, provider, email.as_deref()).await {
        Ok(response_headers) => {
            tracing::info!("Logout completed (email resolved: {})", email.is_some());
            EndpointResponse::new(
                StatusCode::OK,
                response_headers,
                EndpointBody::LoggedOut(LogoutSummary {
                    message: LOGOUT_SUCCESS_MESSAGE.to_string(),
                    cleared: LOGOUT_CLEARED_COOKIES
                        .iter()
                        .map(|name| name.to_string())
                        .collect(),
                    session_ended: email.is_some(),
                }),
            )
        }
        Err(e) => {
            let e = e.log();
            let response_headers = emergency_clear();
            cleanup_session(store, email.as_deref()).await;
            EndpointResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                response_headers,
                EndpointBody::LogoutFailed(LogoutFailure {
                    message: LOGOUT_PARTIAL_MESSAGE.to_string(),
                    error: e.to_string(),
                    session_cleanup_attempted: true,
                }),
            )
        }
    }
}

async fn logout(
    store: &dyn SessionStore,
    provider: &dyn IdentityProvider,
    email: Option<&str>,
) -> Result<HeaderMap, EndpointError> {
    if let Some(email) = email {
        store.end_session(email).await?;
    }

    provider.sign_out().await?;

    let mut headers = HeaderMap::new();
    for name in LOGOUT_CLEARED_COOKIES {
        append_expired_cookie(&mut headers, name)?;
    }
    Ok(headers)
}

/// Cookie first, then the JSON body.
fn resolve_email(headers: &HeaderMap, body: &[u8]) -> Option<String> {
    if let Some(email) = cookie_value(headers, EMAIL_COOKIE) {
        return Some(email);
    }
    if body.is_empty() {
        return None;
    }
    match serde_json::from_slice::<LogoutRequest>(body) {
        Ok(request) => request.email.filter(|email| !email.is_empty()),
        Err(e) => {
            tracing::debug!("Ignoring unparsable logout body: {}", e);
            None
        }
    }
}

/// Expire every logout cookie, skipping any that cannot be rendered.
fn emergency_clear() -> HeaderMap {
    let mut headers = HeaderMap::new();
    for name in LOGOUT_CLEARED_COOKIES {
        if let Err(e) = append_expired_cookie(&mut headers, name) {
            tracing::error!("Emergency clear of {} failed: {}", name, e);
        }
    }
    headers
}

async fn cleanup_session(store: &dyn SessionStore, email: Option<&str>) {
    let Some(email) = email else {
        return;
    };
    if let Err(e) = store.end_session(email).await {
        tracing::error!("Session cleanup error: {}", e);
    }
}
