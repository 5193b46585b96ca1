//! Router for the dashboard login and logout endpoints

use axum::{Router, routing::post};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::handlers::{login, logout};
use super::state::AuthState;

/// Create a router for the auth endpoints
///
/// Mount it under [`AUTH_ROUTE_PREFIX`](crate::AUTH_ROUTE_PREFIX):
/// - `{AUTH_ROUTE_PREFIX}/login`
/// - `{AUTH_ROUTE_PREFIX}/logout`
///
/// Both accept `POST` only; any other method is answered with `405`.
pub fn dashboard_auth_router(state: AuthState) -> Router {
    dashboard_auth_router_no_trace(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(true),
            )
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as `dashboard_auth_router()` but without the HTTP tracing middleware.
pub fn dashboard_auth_router_no_trace(state: AuthState) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .with_state(state)
}
