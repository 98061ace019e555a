//! In-memory user store for testing.
//!
//! Enforces email uniqueness the way the Postgres unique index does.
//! Testing only; `.expect()` on lock operations.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// In-memory implementation of UserRepository.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored users (for test assertions).
    pub fn user_count(&self) -> usize {
        self.users
            .lock()
            .expect("InMemoryUserStore: lock poisoned")
            .len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn insert(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self
            .users
            .lock()
            .expect("InMemoryUserStore: lock poisoned");

        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::new(
                ErrorCode::EmailTaken,
                format!("email already registered: {}", user.email),
            ));
        }

        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self
            .users
            .lock()
            .expect("InMemoryUserStore: lock poisoned");
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self
            .users
            .lock()
            .expect("InMemoryUserStore: lock poisoned");
        Ok(users.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;

    fn test_user(email: &str) -> User {
        User {
            id: UserId::new(),
            email: email.to_string(),
            password_hash: "$2b$10$hash".to_string(),
            first_name: "Demo".to_string(),
            last_name: "User".to_string(),
            native_language: "en".to_string(),
            created_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn insert_and_find_roundtrip() {
        let store = InMemoryUserStore::new();
        let user = test_user("demo@example.com");

        store.insert(&user).await.unwrap();

        let by_email = store.find_by_email("demo@example.com").await.unwrap();
        assert_eq!(by_email, Some(user.clone()));

        let by_id = store.find_by_id(&user.id).await.unwrap();
        assert_eq!(by_id, Some(user));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = InMemoryUserStore::new();
        store.insert(&test_user("demo@example.com")).await.unwrap();

        let err = store
            .insert(&test_user("demo@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmailTaken);
        assert_eq!(store.user_count(), 1);
    }

    #[tokio::test]
    async fn unknown_lookups_return_none() {
        let store = InMemoryUserStore::new();
        assert!(store.find_by_email("nobody@example.com").await.unwrap().is_none());
        assert!(store.find_by_id(&UserId::new()).await.unwrap().is_none());
    }
}
