mod config;
mod core;
mod errors;
mod idle;
mod types;

#[cfg(test)]
mod test_utils;

pub use config::CoordinatorConfig;
pub use self::core::SessionCoordinator;
pub use errors::CoordinatorError;
pub use types::{ActivityEvent, SignInOutcome, SignOutOutcome};
