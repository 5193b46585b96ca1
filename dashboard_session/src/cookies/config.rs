//! Cookie names shared by the client-side jar and the logout endpoint

/// `"true"` sentinel marking a live client session
pub const SESSION_COOKIE: &str = "session";
pub const EMAIL_COOKIE: &str = "email";
pub const USER_ROLE_COOKIE: &str = "userRole";
pub const WORKER_ID_COOKIE: &str = "workerId";
/// `"true"` / `"false"` string
pub const IS_ADMIN_COOKIE: &str = "isAdmin";

/// Issued by the identity provider's full login flow, never by `sign_in`.
pub const CUSTOM_TOKEN_COOKIE: &str = "customToken";
pub const UID_COOKIE: &str = "uid";

pub(crate) const SESSION_SENTINEL: &str = "true";

/// Cookies written together on sign-in and removed together on sign-out.
pub const IDENTITY_COOKIES: [&str; 5] = [
    SESSION_COOKIE,
    EMAIL_COOKIE,
    USER_ROLE_COOKIE,
    WORKER_ID_COOKIE,
    IS_ADMIN_COOKIE,
];

/// Cookies expired by the logout endpoint, in the order they are emitted.
pub const LOGOUT_CLEARED_COOKIES: [&str; 5] = [
    CUSTOM_TOKEN_COOKIE,
    EMAIL_COOKIE,
    IS_ADMIN_COOKIE,
    UID_COOKIE,
    WORKER_ID_COOKIE,
];

/// Whether the logout endpoint marks `name` as HttpOnly.
pub fn is_http_only(name: &str) -> bool {
    name == CUSTOM_TOKEN_COOKIE
}
