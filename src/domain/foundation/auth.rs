//! Authentication types for the domain layer.
//!
//! These types represent an authenticated user extracted from a verified
//! credential. They have no provider dependencies - the JWT adapter (or a
//! mock in tests) populates them via the `SessionValidator` port.

use super::UserId;
use thiserror::Error;

/// Authenticated user extracted from a validated credential.
///
/// This is a domain type; the HTTP middleware injects it into request
/// extensions after the `SessionValidator` port accepts the token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The unique user identifier bound to the credential.
    pub id: UserId,

    /// User's email address.
    pub email: String,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}

/// Authentication errors that can occur during credential handling.
///
/// These errors are domain-centric - they describe what went wrong from
/// the application's perspective, not the token library's.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// Token is valid but the user no longer exists in the system.
    #[error("User not found")]
    UserNotFound,

    /// Credential issuance failed (signing error, hashing error).
    #[error("Credential service error: {0}")]
    ServiceError(String),
}

impl AuthError {
    /// Creates a service error with a message.
    pub fn service_error(message: impl Into<String>) -> Self {
        Self::ServiceError(message.into())
    }

    /// Returns true if this error indicates the user should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidToken | AuthError::TokenExpired | AuthError::UserNotFound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_user_stores_fields() {
        let id = UserId::new();
        let user = AuthenticatedUser::new(id, "user@example.com");
        assert_eq!(user.id, id);
        assert_eq!(user.email, "user@example.com");
    }

    #[test]
    fn invalid_token_requires_reauthentication() {
        assert!(AuthError::InvalidToken.requires_reauthentication());
        assert!(AuthError::TokenExpired.requires_reauthentication());
        assert!(AuthError::UserNotFound.requires_reauthentication());
    }

    #[test]
    fn service_error_does_not_require_reauthentication() {
        assert!(!AuthError::service_error("signing failed").requires_reauthentication());
    }
}
