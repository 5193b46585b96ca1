use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Lax => "Lax",
            Self::None => "None",
        }
    }
}

/// Attributes a cookie is written with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
    pub path: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: Option<SameSite>,
    pub expires: Option<DateTime<Utc>>,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            secure: false,
            http_only: false,
            same_site: None,
            expires: None,
        }
    }
}

impl CookieOptions {
    /// Transport-only session cookie, as written by `sign_in`.
    pub fn secure() -> Self {
        Self {
            secure: true,
            ..Self::default()
        }
    }

    /// Options the logout endpoint uses to expire a cookie.
    pub fn expired(http_only: bool) -> Self {
        Self {
            path: "/".to_string(),
            secure: true,
            http_only,
            same_site: Some(SameSite::Lax),
            expires: Some(DateTime::<Utc>::UNIX_EPOCH),
        }
    }

    /// Render a `Set-Cookie` header value.
    pub fn to_set_cookie(&self, name: &str, value: &str) -> String {
        let mut parts = vec![format!("{name}={value}"), format!("Path={}", self.path)];
        if self.http_only {
            parts.push("HttpOnly".to_string());
        }
        if self.secure {
            parts.push("Secure".to_string());
        }
        if let Some(same_site) = self.same_site {
            parts.push(format!("SameSite={}", same_site.as_str()));
        }
        if let Some(expires) = self.expires {
            parts.push(format!(
                "Expires={}",
                expires.format("%a, %d %b %Y %H:%M:%S GMT")
            ));
        }
        parts.join("; ")
    }
}
