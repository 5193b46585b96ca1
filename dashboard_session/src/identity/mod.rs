mod types;

pub use types::{AuthPhase, Identity, UserRole};
