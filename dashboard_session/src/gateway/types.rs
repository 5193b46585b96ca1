use serde::{Deserialize, Serialize};

use crate::identity::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Claims the gateway returns for an accepted login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    pub is_admin: bool,
    #[serde(default)]
    pub user_role: Option<UserRole>,
    #[serde(default)]
    pub worker_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: LoginUser,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogoutRequest {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted(LoginUser),
    /// Credentials refused; carries the gateway's message when it sent one.
    Rejected { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_wire_format() {
        let json = r#"{"user":{"isAdmin":false,"userRole":"user","workerId":"W-7"}}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.user,
            LoginUser {
                is_admin: false,
                user_role: Some(UserRole::User),
                worker_id: Some("W-7".to_string()),
            }
        );
    }

    #[test]
    fn test_login_user_tolerates_missing_fields() {
        let user: LoginUser = serde_json::from_str(r#"{"isAdmin":true}"#).unwrap();
        assert!(user.is_admin);
        assert_eq!(user.user_role, None);
        assert_eq!(user.worker_id, None);
    }

    #[test]
    fn test_error_body_without_message() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message, None);
    }
}
