mod errors;
mod login;
mod logout;
mod types;


pub use errors::EndpointError;
pub use login::handle_login;
pub use logout::handle_logout;
pub use types::{EndpointBody, EndpointResponse, LogoutFailure, LogoutSummary};
