use axum::{Router, routing::get};
use std::sync::Arc;

use dashboard_session_axum::{
    AUTH_ROUTE_PREFIX, AuthState, InMemoryIdentityProvider, SessionStoreConfig, UserRole,
    build_session_store, dashboard_auth_router,
};

mod server;

use crate::server::{init_tracing, serve_http};

/// Accounts available to the demo until a real identity provider is wired in
fn seed_provider() -> Result<InMemoryIdentityProvider, Box<dyn std::error::Error>> {
    let provider = InMemoryIdentityProvider::new();

    let admin_email =
        std::env::var("DEMO_ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string());
    let admin_password =
        std::env::var("DEMO_ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string());
    provider.add_account(
        &admin_email,
        &admin_password,
        true,
        Some(UserRole::Admin),
        None,
    )?;

    let worker_email =
        std::env::var("DEMO_WORKER_EMAIL").unwrap_or_else(|_| "worker@example.com".to_string());
    let worker_password =
        std::env::var("DEMO_WORKER_PASSWORD").unwrap_or_else(|_| "worker".to_string());
    provider.add_account(
        &worker_email,
        &worker_password,
        false,
        Some(UserRole::User),
        Some("W-001"),
    )?;

    tracing::info!("Seeded demo accounts {} and {}", admin_email, worker_email);
    Ok(provider)
}

async fn index() -> &'static str {
    "dashboard auth demo: POST {prefix}/login, POST {prefix}/logout"
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing(env!("CARGO_CRATE_NAME"));

    let store = build_session_store(&SessionStoreConfig::from_env()?).await?;
    let provider = Arc::new(seed_provider()?);
    let state = AuthState::new(store, provider);

    let app = Router::new()
        .route("/", get(index))
        .nest(AUTH_ROUTE_PREFIX.as_str(), dashboard_auth_router(state));

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    serve_http(port, app).await?;
    Ok(())
}
