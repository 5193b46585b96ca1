use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// User-facing notification emitted by the coordinator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub text: String,
    /// Auto-dismiss after this long
    pub timer: Option<Duration>,
    /// Requires acknowledgement before the flow continues
    pub blocking: bool,
}

impl Notice {
    pub fn error(title: &str, text: &str) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.to_string(),
            text: text.to_string(),
            timer: None,
            blocking: true,
        }
    }

    pub(crate) fn authentication_failed(message: &str) -> Self {
        Self::error("Authentication Failed", message)
    }

    pub(crate) fn sign_in_error(message: &str) -> Self {
        Self::error("Sign In Error", message)
    }

    pub(crate) fn sign_out_error() -> Self {
        Self::error(
            "Sign Out Error",
            "There was a problem signing you out. Please try again.",
        )
    }

    pub(crate) fn signed_out(timer: Duration) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: "Signed Out Successfully".to_string(),
            text: "You have been safely logged out.".to_string(),
            timer: Some(timer),
            blocking: false,
        }
    }

    pub(crate) fn session_expired(timer: Duration) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: "Session Expired".to_string(),
            text: "Your session has expired due to inactivity. Please sign in again."
                .to_string(),
            timer: Some(timer),
            blocking: true,
        }
    }
}
