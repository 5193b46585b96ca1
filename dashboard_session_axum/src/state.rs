use std::sync::Arc;

use dashboard_session::{IdentityProvider, SessionStore};

/// Collaborators the auth endpoints run against
#[derive(Clone)]
pub struct AuthState {
    pub(crate) store: Arc<dyn SessionStore>,
    pub(crate) provider: Arc<dyn IdentityProvider>,
}

impl AuthState {
    pub fn new(store: Arc<dyn SessionStore>, provider: Arc<dyn IdentityProvider>) -> Self {
        Self { store, provider }
    }
}
