use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use dashboard_session::{EndpointResponse, LoginRequest, handle_login, handle_logout};

use crate::error::IntoResponseError;
use crate::state::AuthState;

/// `POST /login` with `{email, password}`
pub(super) async fn login(
    State(state): State<AuthState>,
    body: Bytes,
) -> Result<Response, (StatusCode, String)> {
    let request: LoginRequest = serde_json::from_slice(&body).into_response_error()?;
    let response = handle_login(state.store.as_ref(), state.provider.as_ref(), &request).await;
    Ok(into_response(response))
}

/// `POST /logout`, email taken from the `email` cookie or `{email}` in the body
pub(super) async fn logout(
    State(state): State<AuthState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let response = handle_logout(
        state.store.as_ref(),
        state.provider.as_ref(),
        &headers,
        &body,
    )
    .await;
    into_response(response)
}

fn into_response(response: EndpointResponse) -> Response {
    (response.status, response.headers, Json(response.body)).into_response()
}
