//! HTTP DTOs for identity endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::user::User;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to register a new account.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub native_language: String,
}

/// Request to log in.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A user account in API responses. The password hash never leaves the
/// domain layer.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub native_language: String,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            native_language: user.native_language,
            created_at: user.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Envelope for register/login responses.
#[derive(Debug, Clone, Serialize)]
pub struct AuthEnvelope {
    pub message: String,
    pub user: UserResponse,
    pub token: String,
}

/// Envelope for the current-user endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Timestamp, UserId};

    #[test]
    fn register_request_deserializes() {
        let json = r#"{
            "email": "demo@example.com",
            "password": "demo123",
            "first_name": "Demo",
            "last_name": "User",
            "native_language": "en"
        }"#;
        let req: RegisterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.email, "demo@example.com");
        assert_eq!(req.native_language, "en");
    }

    #[test]
    fn user_response_never_contains_password_hash() {
        let user = User {
            id: UserId::new(),
            email: "demo@example.com".to_string(),
            password_hash: "$2b$10$secret".to_string(),
            first_name: "Demo".to_string(),
            last_name: "User".to_string(),
            native_language: "en".to_string(),
            created_at: Timestamp::now(),
        };

        let response: UserResponse = user.into();
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("secret"));
        assert!(!json.contains("password"));
    }
}
