//! Catalog reader port for language and scenario reference data.
//!
//! Point lookups back the referential existence checks at conversation
//! creation; listings back the public catalog endpoints.

use crate::domain::catalog::{ConversationType, Language};
use crate::domain::foundation::{ConversationTypeId, DomainError, LanguageId};
use async_trait::async_trait;

/// Reader port for reference data.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// List active languages ordered by name.
    async fn list_languages(&self) -> Result<Vec<Language>, DomainError>;

    /// Find a language by id. Returns `None` if not found.
    async fn find_language(&self, id: &LanguageId) -> Result<Option<Language>, DomainError>;

    /// Find a language by its ISO 639-1 code. Returns `None` if not found.
    async fn find_language_by_code(&self, code: &str) -> Result<Option<Language>, DomainError>;

    /// List active conversation types ordered by difficulty ascending.
    async fn list_conversation_types(&self) -> Result<Vec<ConversationType>, DomainError>;

    /// Find a conversation type by id. Returns `None` if not found.
    async fn find_conversation_type(
        &self,
        id: &ConversationTypeId,
    ) -> Result<Option<ConversationType>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn catalog_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn CatalogReader) {}
    }
}
