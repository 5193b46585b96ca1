use headers::HeaderMapExt;
use http::header::{HeaderMap, SET_COOKIE};

use super::config::is_http_only;
use super::errors::CookieError;
use super::types::CookieOptions;

/// Append a `Set-Cookie` header expiring `name` at epoch zero.
pub fn append_expired_cookie(headers: &mut HeaderMap, name: &str) -> Result<(), CookieError> {
    let cookie = CookieOptions::expired(is_http_only(name)).to_set_cookie(name, "");
    tracing::trace!("Expiring cookie: {}", cookie);
    headers.append(
        SET_COOKIE,
        cookie
            .parse()
            .map_err(|_| CookieError::HeaderError(format!("Failed to parse cookie {name}")))?,
    );
    Ok(())
}

/// Read a cookie from an incoming request's `Cookie` header.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookies = headers.typed_get::<headers::Cookie>()?;
    cookies
        .get(name)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
