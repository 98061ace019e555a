//! LoginUserHandler - Command handler for credential checks.

use std::sync::Arc;

use crate::domain::user::{User, UserError};
use crate::ports::{PasswordHasher, TokenIssuer, UserRepository};

/// Command to log in with email and password.
#[derive(Debug, Clone)]
pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoggedInUser {
    pub user: User,
    pub token: String,
}

/// Handler for logging users in.
pub struct LoginUserHandler {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: Arc<dyn TokenIssuer>,
}

impl LoginUserHandler {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            repository,
            hasher,
            issuer,
        }
    }

    /// Unknown email and wrong password both fail with
    /// `InvalidCredentials` - the caller cannot probe which emails have
    /// accounts.
    pub async fn handle(&self, cmd: LoginUserCommand) -> Result<LoggedInUser, UserError> {
        let user = self
            .repository
            .find_by_email(&cmd.email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self.hasher.verify(&cmd.password, &user.password_hash)? {
            return Err(UserError::InvalidCredentials);
        }

        let token = self.issuer.issue(&user.id)?;

        tracing::debug!(user_id = %user.id, "user logged in");

        Ok(LoggedInUser { user, token })
    }
}
