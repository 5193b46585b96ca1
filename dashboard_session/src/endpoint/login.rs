use http::{HeaderMap, StatusCode};

use crate::gateway::{LoginRequest, LoginResponse};
use crate::provider::{IdentityProvider, ProviderError};
use crate::store::SessionStore;

use super::types::{EndpointBody, EndpointResponse};

/// Server side of `POST {prefix}/login`.
///
/// Validates credentials with the identity provider and opens a session
/// record. Identity cookies are written by the client once it sees the
/// returned user.
#[tracing::instrument(skip_all, fields(email = %request.email))]
pub async fn handle_login(
    store: &dyn SessionStore,
    provider: &dyn IdentityProvider,
    request: &LoginRequest,
) -> EndpointResponse {
    let user = match provider.sign_in(&request.email, &request.password).await {
        Ok(user) => user,
        Err(ProviderError::InvalidCredentials) => {
            tracing::debug!("Rejected credentials");
            return EndpointResponse::error(
                StatusCode::UNAUTHORIZED,
                &ProviderError::InvalidCredentials.to_string(),
            );
        }
        Err(e) => {
            tracing::error!("Identity provider error: {}", e);
            return EndpointResponse::error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string());
        }
    };

    if let Err(e) = store.start_session(&user.email).await {
        tracing::error!("Failed to start session: {}", e);
        return EndpointResponse::error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string());
    }

    tracing::info!("Login accepted (admin: {})", user.is_admin);
    EndpointResponse::new(
        StatusCode::OK,
        HeaderMap::new(),
        EndpointBody::LoggedIn(LoginResponse { user: user.into() }),
    )
}
