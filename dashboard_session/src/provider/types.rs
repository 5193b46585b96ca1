use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::gateway::LoginUser;
use crate::identity::UserRole;

use super::errors::ProviderError;

/// Account attributes the identity provider vouches for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderUser {
    pub email: String,
    pub is_admin: bool,
    pub user_role: Option<UserRole>,
    pub worker_id: Option<String>,
}

impl From<ProviderUser> for LoginUser {
    fn from(user: ProviderUser) -> Self {
        Self {
            is_admin: user.is_admin,
            user_role: user.user_role,
            worker_id: user.worker_id,
        }
    }
}

/// Server-side authority over credentials.
#[async_trait]
pub trait IdentityProvider: Send + Sync + 'static {
    async fn sign_in(&self, email: &str, password: &str) -> Result<ProviderUser, ProviderError>;

    /// Drop the provider's own notion of the signed-in user.
    async fn sign_out(&self) -> Result<(), ProviderError>;
}
