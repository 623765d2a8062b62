//! Data Transfer Objects - request/response types for the backend API.

use serde::{Deserialize, Serialize};

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request to register a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// The user record embedded in an auth response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Successful login/registration answer: `{ user, token }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserPayload,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_parses_backend_shape() {
        let json = r#"{
            "user": { "id": 3, "username": "bob", "email": "bob@example.com" },
            "token": "abc.def.ghi"
        }"#;

        let parsed: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.user.id, 3);
        assert_eq!(parsed.token, "abc.def.ghi");
    }

    #[test]
    fn auth_response_missing_token_is_rejected() {
        let json = r#"{"user":{"id":3,"username":"bob","email":"b@e.com"}}"#;
        assert!(serde_json::from_str::<AuthResponse>(json).is_err());
    }
}
