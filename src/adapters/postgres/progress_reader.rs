//! PostgreSQL implementation of ProgressReader.
//!
//! The three statistics counters are read with independent queries; each
//! is monotonic, so slight skew between them is acceptable and no
//! cross-query transaction is taken.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::progress::PracticeStats;
use crate::ports::{ProgressReader, ProgressView};

use super::{col, row_to_language_prefixed};

/// PostgreSQL implementation of ProgressReader.
#[derive(Clone)]
pub struct PostgresProgressReader {
    pool: PgPool,
}

impl PostgresProgressReader {
    /// Creates a new PostgresProgressReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProgressReader for PostgresProgressReader {
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<ProgressView>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT p.sessions_count, p.total_duration_minutes, p.last_session_at,
                   l.id AS language_id, l.code AS language_code, l.name AS language_name,
                   l.native_name AS language_native_name, l.is_active AS language_is_active
            FROM user_progress p
            JOIN languages l ON l.id = p.language_id
            WHERE p.user_id = $1
            ORDER BY l.name ASC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list progress: {}", e)))?;

        rows.iter()
            .map(|row| {
                let last_session_at: chrono::DateTime<chrono::Utc> = col(row, "last_session_at")?;
                Ok(ProgressView {
                    language: row_to_language_prefixed(row, "language_")?,
                    sessions_count: col(row, "sessions_count")?,
                    total_duration_minutes: col(row, "total_duration_minutes")?,
                    last_session_at: Timestamp::from_datetime(last_session_at),
                })
            })
            .collect()
    }

    async fn practice_stats(&self, user_id: &UserId) -> Result<PracticeStats, DomainError> {
        let (total_conversations,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM conversations WHERE user_id = $1 AND status = 'completed'",
        )
        .bind(user_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to count conversations: {}", e)))?;

        // COALESCE keeps a user with no progress rows at zero, not NULL.
        let (total_minutes,): (i64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(total_duration_minutes), 0) FROM user_progress WHERE user_id = $1",
        )
        .bind(user_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to sum minutes: {}", e)))?;

        let (languages_practiced,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM user_progress WHERE user_id = $1")
                .bind(user_id.as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to count languages: {}", e)))?;

        Ok(PracticeStats {
            total_conversations,
            total_minutes,
            languages_practiced,
        })
    }
}
