//! PostgreSQL implementation of CatalogReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::catalog::{ConversationType, Language};
use crate::domain::foundation::{ConversationTypeId, DomainError, LanguageId};
use crate::ports::CatalogReader;

use super::{row_to_language_prefixed, row_to_type_prefixed};

/// PostgreSQL implementation of CatalogReader.
#[derive(Clone)]
pub struct PostgresCatalogReader {
    pool: PgPool,
}

impl PostgresCatalogReader {
    /// Creates a new PostgresCatalogReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogReader for PostgresCatalogReader {
    async fn list_languages(&self) -> Result<Vec<Language>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, code, name, native_name, is_active
            FROM languages
            WHERE is_active
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list languages: {}", e)))?;

        rows.iter()
            .map(|row| row_to_language_prefixed(row, ""))
            .collect()
    }

    async fn find_language(&self, id: &LanguageId) -> Result<Option<Language>, DomainError> {
        let row = sqlx::query(
            "SELECT id, code, name, native_name, is_active FROM languages WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch language: {}", e)))?;

        row.map(|r| row_to_language_prefixed(&r, "")).transpose()
    }

    async fn find_language_by_code(&self, code: &str) -> Result<Option<Language>, DomainError> {
        let row = sqlx::query(
            "SELECT id, code, name, native_name, is_active FROM languages WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch language: {}", e)))?;

        row.map(|r| row_to_language_prefixed(&r, "")).transpose()
    }

    async fn list_conversation_types(&self) -> Result<Vec<ConversationType>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, difficulty_level, is_active
            FROM conversation_types
            WHERE is_active
            ORDER BY difficulty_level ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list conversation types: {}", e)))?;

        rows.iter().map(|row| row_to_type_prefixed(row, "")).collect()
    }

    async fn find_conversation_type(
        &self,
        id: &ConversationTypeId,
    ) -> Result<Option<ConversationType>, DomainError> {
        let row = sqlx::query(
            "SELECT id, name, description, difficulty_level, is_active FROM conversation_types WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch conversation type: {}", e)))?;

        row.map(|r| row_to_type_prefixed(&r, "")).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_is_clone_and_send() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<PostgresCatalogReader>();
    }
}
