use async_trait::async_trait;
use std::env;
use std::time::Duration;
use url::Url;

use super::errors::GatewayError;
use super::types::{ErrorBody, LoginOutcome, LoginRequest, LoginResponse, LogoutRequest};

pub(crate) const DEFAULT_REJECTION_MESSAGE: &str = "Failed to sign in. Please try again.";

const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:3000/api/auth/";

/// Network endpoints that validate credentials and revoke sessions
#[async_trait]
pub trait AuthGateway: Send + Sync + 'static {
    /// `POST {base}/login`. Non-2xx responses become [`LoginOutcome::Rejected`].
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, GatewayError>;

    /// `POST {base}/logout`. Non-2xx responses are errors.
    async fn logout(&self, email: Option<&str>) -> Result<(), GatewayError>;
}

/// [`AuthGateway`] over HTTP with `reqwest`
#[derive(Debug, Clone)]
pub struct HttpAuthGateway {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpAuthGateway {
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        // Url::join drops the last segment unless the base ends with '/'
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };

        // No request timeout: a slow gateway blocks the caller, bounded only
        // by the transport's own limits.
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Build from `AUTH_GATEWAY_URL`.
    pub fn from_env() -> Result<Self, GatewayError> {
        let url = env::var("AUTH_GATEWAY_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());
        Self::new(&url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        Ok(self.base_url.join(path)?)
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    #[tracing::instrument(skip(self, password))]
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, GatewayError> {
        let url = self.endpoint("login")?;
        let response = self
            .client
            .post(url)
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            tracing::debug!("Login rejected with status {}", status);
            return Ok(LoginOutcome::Rejected {
                message: body
                    .message
                    .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string()),
            });
        }

        let body: LoginResponse = response.json().await?;
        Ok(LoginOutcome::Accepted(body.user))
    }

    #[tracing::instrument(skip(self))]
    async fn logout(&self, email: Option<&str>) -> Result<(), GatewayError> {
        let url = self.endpoint("logout")?;
        let response = self
            .client
            .post(url)
            .json(&LogoutRequest {
                email: email.map(str::to_string),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::error!("Logout failed with status: {}", response.status());
            return Err(GatewayError::HttpStatusError(response.status()));
        }
        Ok(())
    }
}
