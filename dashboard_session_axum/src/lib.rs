mod error;
mod handlers;
mod router;
mod state;

pub use error::IntoResponseError;
pub use router::{dashboard_auth_router, dashboard_auth_router_no_trace};
pub use state::AuthState;

// Re-export what an application needs to assemble the router state
pub use dashboard_session::{
    AUTH_ROUTE_PREFIX, IdentityProvider, InMemoryIdentityProvider, SessionStore,
    SessionStoreConfig, StorageError, UserRole, build_session_store,
};
