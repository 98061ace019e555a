//! PostgreSQL implementation of ConversationReader.
//!
//! Joins conversations with their reference data for display views;
//! transcripts are fetched in timestamp order for the detail view.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::conversation::{Speaker, Transcript};
use crate::domain::foundation::{
    ConversationId, DomainError, Timestamp, TranscriptId, UserId,
};
use crate::ports::{ConversationDetail, ConversationReader, ConversationView};

use super::{col, row_to_language_prefixed, row_to_type_prefixed, str_to_status};

const VIEW_SELECT: &str = r#"
    SELECT c.id, c.user_id, c.status, c.started_at, c.ended_at, c.duration_seconds,
           l.id AS language_id, l.code AS language_code, l.name AS language_name,
           l.native_name AS language_native_name, l.is_active AS language_is_active,
           t.id AS type_id, t.name AS type_name, t.description AS type_description,
           t.difficulty_level AS type_difficulty_level, t.is_active AS type_is_active
    FROM conversations c
    JOIN languages l ON l.id = c.language_id
    JOIN conversation_types t ON t.id = c.type_id
"#;

/// PostgreSQL implementation of ConversationReader.
#[derive(Clone)]
pub struct PostgresConversationReader {
    pool: PgPool,
}

impl PostgresConversationReader {
    /// Creates a new PostgresConversationReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn transcripts_for(
        &self,
        id: &ConversationId,
    ) -> Result<Vec<Transcript>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, conversation_id, speaker, text, timestamp
            FROM transcripts
            WHERE conversation_id = $1
            ORDER BY timestamp ASC
            "#,
        )
        .bind(id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch transcripts: {}", e)))?;

        rows.iter().map(row_to_transcript).collect()
    }
}

#[async_trait]
impl ConversationReader for PostgresConversationReader {
    async fn get_owned(
        &self,
        id: &ConversationId,
        user_id: &UserId,
    ) -> Result<Option<ConversationDetail>, DomainError> {
        let row = sqlx::query(&format!(
            "{} WHERE c.id = $1 AND c.user_id = $2",
            VIEW_SELECT
        ))
        .bind(id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch conversation: {}", e)))?;

        let conversation = match row {
            Some(row) => row_to_view(&row)?,
            None => return Ok(None),
        };

        let transcripts = self.transcripts_for(id).await?;

        Ok(Some(ConversationDetail {
            conversation,
            transcripts,
        }))
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<ConversationView>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE c.user_id = $1 ORDER BY c.started_at DESC",
            VIEW_SELECT
        ))
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list conversations: {}", e)))?;

        rows.iter().map(row_to_view).collect()
    }
}

fn row_to_view(row: &PgRow) -> Result<ConversationView, DomainError> {
    let status_str: String = col(row, "status")?;
    let started_at: chrono::DateTime<chrono::Utc> = col(row, "started_at")?;
    let ended_at: Option<chrono::DateTime<chrono::Utc>> = col(row, "ended_at")?;

    Ok(ConversationView {
        id: ConversationId::from_uuid(col(row, "id")?),
        user_id: UserId::from_uuid(col(row, "user_id")?),
        language: row_to_language_prefixed(row, "language_")?,
        conversation_type: row_to_type_prefixed(row, "type_")?,
        status: str_to_status(&status_str)?,
        started_at: Timestamp::from_datetime(started_at),
        ended_at: ended_at.map(Timestamp::from_datetime),
        duration_seconds: col(row, "duration_seconds")?,
    })
}

fn row_to_transcript(row: &PgRow) -> Result<Transcript, DomainError> {
    let speaker_str: String = col(row, "speaker")?;
    let speaker = match speaker_str.as_str() {
        "user" => Speaker::User,
        "partner" => Speaker::Partner,
        other => {
            return Err(DomainError::database(format!(
                "Invalid transcript speaker: {}",
                other
            )))
        }
    };
    let timestamp: chrono::DateTime<chrono::Utc> = col(row, "timestamp")?;

    Ok(Transcript {
        id: TranscriptId::from_uuid(col(row, "id")?),
        conversation_id: ConversationId::from_uuid(col(row, "conversation_id")?),
        speaker,
        text: col(row, "text")?,
        timestamp: Timestamp::from_datetime(timestamp),
    })
}
