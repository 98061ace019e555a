//! Identity provider ports.
//!
//! The core never inspects credentials itself: issuing and verifying
//! tokens, and hashing passwords, all live behind these ports. The JWT
//! and bcrypt adapters implement them in production; deterministic mocks
//! implement them in tests.

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use async_trait::async_trait;

/// Verifies an opaque credential and resolves it to an authenticated
/// user.
///
/// Called by the HTTP auth middleware before any core operation runs.
/// Implementations confirm the bound user still exists.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a bearer token.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` / `TokenExpired` on a bad credential
    /// - `UserNotFound` if the bound user no longer exists
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

/// Issues a signed credential binding a user identity.
pub trait TokenIssuer: Send + Sync {
    /// Issue a token for the given user.
    ///
    /// # Errors
    ///
    /// - `ServiceError` if signing fails
    fn issue(&self, user_id: &UserId) -> Result<String, AuthError>;
}

/// One-way password hashing.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password for storage.
    fn hash(&self, plain: &str) -> Result<String, AuthError>;

    /// Check a plaintext password against a stored hash.
    fn verify(&self, plain: &str, hash: &str) -> Result<bool, AuthError>;
}
