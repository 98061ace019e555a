//! User entity and account errors.
//!
//! Credential *verification* lives behind the `SessionValidator` port;
//! this module only models the stored account record the register/login
//! flows operate on.

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// A registered user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    /// bcrypt hash; never serialized into API responses (the HTTP layer
    /// maps to a DTO without it).
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    /// Two-letter code of the user's native language.
    pub native_language: String,
    pub created_at: Timestamp,
}

/// Account and credential-flow errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// Registration with an email that already has an account.
    EmailTaken,
    /// Unknown email or wrong password - indistinguishable on purpose.
    InvalidCredentials,
    /// User record missing (e.g. deleted after the token was issued).
    NotFound(UserId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl UserError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        UserError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        UserError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::EmailTaken => ErrorCode::EmailTaken,
            UserError::InvalidCredentials => ErrorCode::Unauthorized,
            UserError::NotFound(_) => ErrorCode::UserNotFound,
            UserError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            UserError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            UserError::EmailTaken => "User already exists".to_string(),
            UserError::InvalidCredentials => "Invalid credentials".to_string(),
            UserError::NotFound(id) => format!("User not found: {}", id),
            UserError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            UserError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for UserError {}

impl From<DomainError> for UserError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::EmailTaken => UserError::EmailTaken,
            _ => UserError::Infrastructure(err.to_string()),
        }
    }
}

impl From<crate::domain::foundation::AuthError> for UserError {
    fn from(err: crate::domain::foundation::AuthError) -> Self {
        // Hashing or signing failures while registering/logging in are
        // infrastructure faults, not caller mistakes.
        UserError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_taken_maps_to_its_code() {
        assert_eq!(UserError::EmailTaken.code(), ErrorCode::EmailTaken);
    }

    #[test]
    fn invalid_credentials_message_does_not_name_a_cause() {
        // Same message for unknown email and wrong password.
        assert_eq!(UserError::InvalidCredentials.message(), "Invalid credentials");
    }

    #[test]
    fn email_taken_survives_domain_error_conversion() {
        let err: UserError = DomainError::new(ErrorCode::EmailTaken, "duplicate").into();
        assert_eq!(err, UserError::EmailTaken);
    }
}
