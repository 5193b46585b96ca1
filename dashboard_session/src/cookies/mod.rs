mod config;
mod errors;
mod header;
mod jar;
mod types;

pub use config::{
    CUSTOM_TOKEN_COOKIE, EMAIL_COOKIE, IDENTITY_COOKIES, IS_ADMIN_COOKIE, LOGOUT_CLEARED_COOKIES,
    SESSION_COOKIE, UID_COOKIE, USER_ROLE_COOKIE, WORKER_ID_COOKIE, is_http_only,
};
pub use errors::CookieError;
pub use header::{append_expired_cookie, cookie_value};
pub use jar::{CookieJar, MemoryCookieJar};
pub use types::{CookieOptions, SameSite};

pub(crate) use config::SESSION_SENTINEL;
