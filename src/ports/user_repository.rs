//! User repository port.
//!
//! Account persistence behind the register/login/me flows. Email
//! uniqueness is enforced by the store, not by a pre-check.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;
use async_trait::async_trait;

/// Repository port for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Save a new user.
    ///
    /// # Errors
    ///
    /// - `EmailTaken` if the email already has an account
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, user: &User) -> Result<(), DomainError>;

    /// Find a user by email. Returns `None` if not found.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;
}
