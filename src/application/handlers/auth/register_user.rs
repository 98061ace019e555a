//! RegisterUserHandler - Command handler for account creation.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::user::{User, UserError};
use crate::ports::{PasswordHasher, TokenIssuer, UserRepository};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Command to register a new user.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub native_language: String,
}

/// Result of a successful registration: the stored account and a fresh
/// credential.
#[derive(Debug, Clone)]
pub struct RegisteredUser {
    pub user: User,
    pub token: String,
}

/// Handler for registering users.
pub struct RegisterUserHandler {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: Arc<dyn TokenIssuer>,
}

impl RegisterUserHandler {
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

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<RegisteredUser, UserError> {
        validate(&cmd)?;

        let password_hash = self.hasher.hash(&cmd.password)?;

        let user = User {
            id: UserId::new(),
            email: cmd.email,
            password_hash,
            first_name: cmd.first_name,
            last_name: cmd.last_name,
            native_language: cmd.native_language,
            created_at: Timestamp::now(),
        };

        // Email uniqueness is enforced by the store on insert, not by a
        // racy pre-check.
        self.repository.insert(&user).await?;

        let token = self.issuer.issue(&user.id)?;

        tracing::info!(user_id = %user.id, "user registered");

        Ok(RegisteredUser { user, token })
    }
}

fn validate(cmd: &RegisterUserCommand) -> Result<(), UserError> {
    if !cmd.email.contains('@') || cmd.email.trim().is_empty() {
        return Err(UserError::validation("email", "must be a valid email address"));
    }
    if cmd.password.len() < MIN_PASSWORD_LENGTH {
        return Err(UserError::validation(
            "password",
            format!("must be at least {} characters", MIN_PASSWORD_LENGTH),
        ));
    }
    if cmd.first_name.trim().is_empty() {
        return Err(UserError::validation("first_name", "cannot be empty"));
    }
    if cmd.last_name.trim().is_empty() {
        return Err(UserError::validation("last_name", "cannot be empty"));
    }
    if cmd.native_language.len() != 2 {
        return Err(UserError::validation(
            "native_language",
            "must be a two-letter language code",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::{MockCredentials, MockPasswords};
    use super::*;
    use crate::adapters::memory::InMemoryUserStore;

    fn command() -> RegisterUserCommand {
        RegisterUserCommand {
            email: "demo@example.com".to_string(),
            password: "demo123".to_string(),
            first_name: "Demo".to_string(),
            last_name: "User".to_string(),
            native_language: "en".to_string(),
        }
    }

    fn handler(store: Arc<InMemoryUserStore>) -> RegisterUserHandler {
        RegisterUserHandler::new(
            store,
            Arc::new(MockPasswords),
            Arc::new(MockCredentials::default()),
        )
    }

    #[tokio::test]
    async fn registers_user_and_issues_token() {
        let store = Arc::new(InMemoryUserStore::new());
        let result = handler(store.clone()).handle(command()).await.unwrap();

        assert_eq!(result.user.email, "demo@example.com");
        assert!(!result.token.is_empty());
        assert_ne!(result.user.password_hash, "demo123");
        assert_eq!(store.user_count(), 1);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = Arc::new(InMemoryUserStore::new());
        let handler = handler(store.clone());

        handler.handle(command()).await.unwrap();
        let second = handler.handle(command()).await;

        assert_eq!(second.unwrap_err(), UserError::EmailTaken);
        assert_eq!(store.user_count(), 1);
    }

    #[tokio::test]
    async fn short_password_is_rejected() {
        let store = Arc::new(InMemoryUserStore::new());
        let mut cmd = command();
        cmd.password = "12345".to_string();

        let result = handler(store.clone()).handle(cmd).await;

        assert!(matches!(
            result,
            Err(UserError::ValidationFailed { field, .. }) if field == "password"
        ));
        assert_eq!(store.user_count(), 0);
    }

    #[tokio::test]
    async fn malformed_email_is_rejected() {
        let store = Arc::new(InMemoryUserStore::new());
        let mut cmd = command();
        cmd.email = "not-an-email".to_string();

        let result = handler(store).handle(cmd).await;

        assert!(matches!(
            result,
            Err(UserError::ValidationFailed { field, .. }) if field == "email"
        ));
    }

    #[tokio::test]
    async fn native_language_must_be_two_letters() {
        let store = Arc::new(InMemoryUserStore::new());
        let mut cmd = command();
        cmd.native_language = "eng".to_string();

        let result = handler(store).handle(cmd).await;

        assert!(matches!(
            result,
            Err(UserError::ValidationFailed { field, .. }) if field == "native_language"
        ));
    }
}
