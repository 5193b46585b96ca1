mod client;
mod errors;
mod types;

pub use client::{AuthGateway, HttpAuthGateway};
pub use errors::GatewayError;
pub use types::{ErrorBody, LoginOutcome, LoginRequest, LoginResponse, LoginUser, LogoutRequest};
