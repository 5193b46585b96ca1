use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use subtle::ConstantTimeEq;

use crate::identity::UserRole;

use super::errors::ProviderError;
use super::types::{IdentityProvider, ProviderUser};

#[derive(Debug, Clone)]
struct Account {
    password: String,
    user: ProviderUser,
}

/// Identity provider backed by a programmatically seeded account table
#[derive(Debug, Default)]
pub struct InMemoryIdentityProvider {
    accounts: Mutex<HashMap<String, Account>>,
    fail_sign_out: AtomicBool,
    sign_outs: AtomicUsize,
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_account(
        &self,
        email: &str,
        password: &str,
        is_admin: bool,
        user_role: Option<UserRole>,
        worker_id: Option<&str>,
    ) -> Result<(), ProviderError> {
        let mut accounts = self
            .accounts
            .lock()
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;
        accounts.insert(
            email.to_string(),
            Account {
                password: password.to_string(),
                user: ProviderUser {
                    email: email.to_string(),
                    is_admin,
                    user_role,
                    worker_id: worker_id.map(str::to_string),
                },
            },
        );
        Ok(())
    }

    /// Make every subsequent `sign_out` fail.
    pub fn fail_sign_out(&self, fail: bool) {
        self.fail_sign_out.store(fail, Ordering::SeqCst);
    }

    pub fn sign_out_calls(&self) -> usize {
        self.sign_outs.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<ProviderUser, ProviderError> {
        let account = {
            let accounts = self
                .accounts
                .lock()
                .map_err(|e| ProviderError::Unavailable(e.to_string()))?;
            accounts.get(email).cloned()
        };

        let Some(account) = account else {
            tracing::debug!("No account for {}", email);
            return Err(ProviderError::InvalidCredentials);
        };

        if !bool::from(account.password.as_bytes().ct_eq(password.as_bytes())) {
            tracing::debug!("Password mismatch for {}", email);
            return Err(ProviderError::InvalidCredentials);
        }

        Ok(account.user)
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.sign_outs.fetch_add(1, Ordering::SeqCst);
        if self.fail_sign_out.load(Ordering::SeqCst) {
            return Err(ProviderError::SignOut(
                "identity provider rejected sign out".to_string(),
            ));
        }
        Ok(())
    }
}
