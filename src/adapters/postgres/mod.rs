//! PostgreSQL adapters - port implementations over sqlx.
//!
//! One adapter per port; all share a `PgPool` handle constructed at
//! startup and passed in explicitly.

mod catalog_reader;
mod conversation_reader;
mod conversation_repository;
mod progress_reader;
mod user_repository;

pub use catalog_reader::PostgresCatalogReader;
pub use conversation_reader::PostgresConversationReader;
pub use conversation_repository::PostgresConversationRepository;
pub use progress_reader::PostgresProgressReader;
pub use user_repository::PostgresUserRepository;

use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::domain::catalog::{ConversationType, Language};
use crate::domain::conversation::Conversation;
use crate::domain::foundation::{
    ConversationId, ConversationStatus, ConversationTypeId, DomainError, LanguageId, Timestamp,
    UserId,
};
use crate::domain::progress::UserProgress;

/// Column list shared by every conversation select/returning clause.
pub(crate) const CONVERSATION_COLUMNS: &str =
    "id, user_id, language_id, type_id, status, started_at, ended_at, duration_seconds";

/// Fetches a named column, wrapping decode failures as database errors.
pub(crate) fn col<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", name, e)))
}

pub(crate) fn status_to_str(status: ConversationStatus) -> &'static str {
    match status {
        ConversationStatus::Active => "active",
        ConversationStatus::Completed => "completed",
    }
}

pub(crate) fn str_to_status(s: &str) -> Result<ConversationStatus, DomainError> {
    match s {
        "active" => Ok(ConversationStatus::Active),
        "completed" => Ok(ConversationStatus::Completed),
        _ => Err(DomainError::database(format!(
            "Invalid conversation status: {}",
            s
        ))),
    }
}

pub(crate) fn row_to_conversation(row: &PgRow) -> Result<Conversation, DomainError> {
    let status_str: String = col(row, "status")?;
    let ended_at: Option<chrono::DateTime<chrono::Utc>> = col(row, "ended_at")?;
    let started_at: chrono::DateTime<chrono::Utc> = col(row, "started_at")?;

    Ok(Conversation::reconstitute(
        ConversationId::from_uuid(col(row, "id")?),
        UserId::from_uuid(col(row, "user_id")?),
        LanguageId::from_uuid(col(row, "language_id")?),
        ConversationTypeId::from_uuid(col(row, "type_id")?),
        str_to_status(&status_str)?,
        Timestamp::from_datetime(started_at),
        ended_at.map(Timestamp::from_datetime),
        col(row, "duration_seconds")?,
    ))
}

pub(crate) fn row_to_progress(row: &PgRow) -> Result<UserProgress, DomainError> {
    let last_session_at: chrono::DateTime<chrono::Utc> = col(row, "last_session_at")?;

    Ok(UserProgress {
        user_id: UserId::from_uuid(col(row, "user_id")?),
        language_id: LanguageId::from_uuid(col(row, "language_id")?),
        sessions_count: col(row, "sessions_count")?,
        total_duration_minutes: col(row, "total_duration_minutes")?,
        last_session_at: Timestamp::from_datetime(last_session_at),
    })
}

/// Maps a row with `language_`-prefixed columns to a Language.
pub(crate) fn row_to_language_prefixed(row: &PgRow, prefix: &str) -> Result<Language, DomainError> {
    Ok(Language {
        id: LanguageId::from_uuid(col(row, &format!("{}id", prefix))?),
        code: col(row, &format!("{}code", prefix))?,
        name: col(row, &format!("{}name", prefix))?,
        native_name: col(row, &format!("{}native_name", prefix))?,
        is_active: col(row, &format!("{}is_active", prefix))?,
    })
}

/// Maps a row with `type_`-prefixed columns to a ConversationType.
pub(crate) fn row_to_type_prefixed(row: &PgRow, prefix: &str) -> Result<ConversationType, DomainError> {
    Ok(ConversationType {
        id: ConversationTypeId::from_uuid(col(row, &format!("{}id", prefix))?),
        name: col(row, &format!("{}name", prefix))?,
        description: col(row, &format!("{}description", prefix))?,
        difficulty_level: col(row, &format!("{}difficulty_level", prefix))?,
        is_active: col(row, &format!("{}is_active", prefix))?,
    })
}
