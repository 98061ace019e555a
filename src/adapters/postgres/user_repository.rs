//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

use super::col;

const USER_COLUMNS: &str =
    "id, email, password_hash, first_name, last_name, native_language, created_at";

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, user: &User) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (
                id, email, password_hash, first_name, last_name, native_language, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.native_language)
        .bind(user.created_at.as_datetime())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            // The unique index on email is the authority on duplicates.
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Err(DomainError::new(
                ErrorCode::EmailTaken,
                format!("email already registered: {}", user.email),
            )),
            Err(e) => Err(DomainError::database(format!(
                "Failed to insert user: {}",
                e
            ))),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch user: {}", e)))?;

        row.map(|r| row_to_user(&r)).transpose()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch user: {}", e)))?;

        row.map(|r| row_to_user(&r)).transpose()
    }
}

fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
    let created_at: chrono::DateTime<chrono::Utc> = col(row, "created_at")?;

    Ok(User {
        id: UserId::from_uuid(col(row, "id")?),
        email: col(row, "email")?,
        password_hash: col(row, "password_hash")?,
        first_name: col(row, "first_name")?,
        last_name: col(row, "last_name")?,
        native_language: col(row, "native_language")?,
        created_at: Timestamp::from_datetime(created_at),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_is_clone_and_send() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<PostgresUserRepository>();
    }
}
