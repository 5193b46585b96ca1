use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::cookies::{
    CookieError, CookieJar, EMAIL_COOKIE, IS_ADMIN_COOKIE, SESSION_COOKIE, USER_ROLE_COOKIE,
    WORKER_ID_COOKIE,
};

/// Role string as issued by the auth gateway
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserRole {
    Admin,
    User,
    Other(String),
}

impl UserRole {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Other(role) => role.as_str(),
        }
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            "admin" => Self::Admin,
            "user" => Self::User,
            other => Self::Other(other.to_string()),
        }
    }
}

impl FromStr for UserRole {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for UserRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// Identity snapshot held in memory for the lifetime of a page session.
///
/// `is_admin` is taken verbatim from whoever established the identity and is
/// never recomputed from `role`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub role: Option<UserRole>,
    pub worker_id: Option<String>,
    pub is_admin: bool,
}

impl Identity {
    /// Rebuild the snapshot from the cookie jar.
    ///
    /// Returns `None` unless both `session` and `email` are present; the other
    /// three cookies are read as-is when they exist. An empty `userRole` or
    /// `workerId` reads as absent.
    pub fn from_cookies(jar: &dyn CookieJar) -> Result<Option<Self>, CookieError> {
        let session = jar.get(SESSION_COOKIE)?;
        let email = jar.get(EMAIL_COOKIE)?;

        let (Some(_), Some(email)) = (session, email) else {
            return Ok(None);
        };

        let role = jar
            .get(USER_ROLE_COOKIE)?
            .filter(|r| !r.is_empty())
            .map(|r| UserRole::from(r.as_str()));
        let worker_id = jar.get(WORKER_ID_COOKIE)?.filter(|w| !w.is_empty());
        let is_admin = jar.get(IS_ADMIN_COOKIE)?.as_deref() == Some("true");

        Ok(Some(Self {
            email,
            role,
            worker_id,
            is_admin,
        }))
    }
}

/// Lifecycle of the session coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    Uninitialized,
    Loading,
    Authenticated,
    Anonymous,
}
