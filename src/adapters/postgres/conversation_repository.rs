//! PostgreSQL implementation of ConversationRepository.
//!
//! The completion path runs the status compare-and-swap and the progress
//! upsert-increment in one transaction, which is what makes the
//! transition-plus-fold a single observable unit.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::conversation::{Conversation, SessionCompletion};
use crate::domain::foundation::{ConversationId, DomainError, UserId};
use crate::domain::progress::ProgressDelta;
use crate::ports::ConversationRepository;

use super::{row_to_conversation, row_to_progress, status_to_str, CONVERSATION_COLUMNS};

/// PostgreSQL implementation of ConversationRepository.
#[derive(Clone)]
pub struct PostgresConversationRepository {
    pool: PgPool,
}

impl PostgresConversationRepository {
    /// Creates a new PostgresConversationRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConversationRepository for PostgresConversationRepository {
    async fn insert(&self, conversation: &Conversation) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO conversations (
                id, user_id, language_id, type_id, status, started_at, ended_at, duration_seconds
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(conversation.id().as_uuid())
        .bind(conversation.user_id().as_uuid())
        .bind(conversation.language_id().as_uuid())
        .bind(conversation.type_id().as_uuid())
        .bind(status_to_str(conversation.status()))
        .bind(conversation.started_at().as_datetime())
        .bind(conversation.ended_at().map(|t| *t.as_datetime()))
        .bind(conversation.duration_seconds())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert conversation: {}", e)))?;

        Ok(())
    }

    async fn find_owned(
        &self,
        id: &ConversationId,
        user_id: &UserId,
    ) -> Result<Option<Conversation>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM conversations WHERE id = $1 AND user_id = $2",
            CONVERSATION_COLUMNS
        ))
        .bind(id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch conversation: {}", e)))?;

        row.map(|r| row_to_conversation(&r)).transpose()
    }

    async fn complete_active(
        &self,
        id: &ConversationId,
        user_id: &UserId,
        completion: &SessionCompletion,
    ) -> Result<Option<Conversation>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database(format!("Failed to open transaction: {}", e)))?;

        // Compare-and-swap on status: zero rows updated means the
        // conversation is missing, foreign, or already completed.
        let row = sqlx::query(&format!(
            r#"
            UPDATE conversations
            SET status = 'completed', ended_at = $3, duration_seconds = $4
            WHERE id = $1 AND user_id = $2 AND status = 'active'
            RETURNING {}
            "#,
            CONVERSATION_COLUMNS
        ))
        .bind(id.as_uuid())
        .bind(user_id.as_uuid())
        .bind(completion.ended_at.as_datetime())
        .bind(completion.duration_seconds)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to complete conversation: {}", e)))?;

        let conversation = match row {
            Some(row) => row_to_conversation(&row)?,
            // Dropping the transaction rolls it back.
            None => return Ok(None),
        };

        // Fold in the same transaction. The additive ON CONFLICT update is
        // what keeps two concurrent completions for the same (user,
        // language) from losing either increment.
        let delta = ProgressDelta::from_completion(completion);
        let progress_row = sqlx::query(
            r#"
            INSERT INTO user_progress (
                user_id, language_id, sessions_count, total_duration_minutes, last_session_at
            ) VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, language_id) DO UPDATE SET
                sessions_count = user_progress.sessions_count + EXCLUDED.sessions_count,
                total_duration_minutes =
                    user_progress.total_duration_minutes + EXCLUDED.total_duration_minutes,
                last_session_at = GREATEST(user_progress.last_session_at, EXCLUDED.last_session_at)
            RETURNING user_id, language_id, sessions_count, total_duration_minutes, last_session_at
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(conversation.language_id().as_uuid())
        .bind(delta.sessions)
        .bind(delta.minutes)
        .bind(delta.last_session_at.as_datetime())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fold progress: {}", e)))?;

        let progress = row_to_progress(&progress_row)?;
        if let Err(e) = progress.check_invariants() {
            tracing::error!(
                user_id = %user_id,
                language_id = %conversation.language_id(),
                "progress fold violated its contract: {}",
                e
            );
            return Err(e);
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database(format!("Failed to commit completion: {}", e)))?;

        Ok(Some(conversation))
    }
}
