//! Process-wide settings shared by the core and the router

use std::sync::LazyLock;

/// Route prefix the login and logout endpoints are mounted under
///
/// Default: "/api/auth"
pub static AUTH_ROUTE_PREFIX: LazyLock<String> = LazyLock::new(|| {
    std::env::var("AUTH_ROUTE_PREFIX").unwrap_or_else(|_| "/api/auth".to_string())
});
