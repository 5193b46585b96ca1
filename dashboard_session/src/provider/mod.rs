mod errors;
mod memory;
mod types;

pub use errors::ProviderError;
pub use memory::InMemoryIdentityProvider;
pub use types::{IdentityProvider, ProviderUser};
