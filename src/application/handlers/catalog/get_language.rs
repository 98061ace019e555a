//! GetLanguageHandler - Query handler for language lookup by code.

use std::sync::Arc;

use crate::domain::catalog::Language;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::CatalogReader;

/// Query for one language by its ISO 639-1 code.
#[derive(Debug, Clone)]
pub struct GetLanguageQuery {
    pub code: String,
}

/// Handler for fetching a language by code.
pub struct GetLanguageHandler {
    catalog: Arc<dyn CatalogReader>,
}

impl GetLanguageHandler {
    pub fn new(catalog: Arc<dyn CatalogReader>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: GetLanguageQuery) -> Result<Language, DomainError> {
        self.catalog
            .find_language_by_code(&query.code)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::LanguageNotFound,
                    format!("Language not found: {}", query.code),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPracticeStore;
    use crate::domain::foundation::LanguageId;

    fn store_with_spanish() -> Arc<InMemoryPracticeStore> {
        Arc::new(InMemoryPracticeStore::with_catalog(
            vec![Language {
                id: LanguageId::new(),
                code: "es".to_string(),
                name: "Spanish".to_string(),
                native_name: "Español".to_string(),
                is_active: true,
            }],
            vec![],
        ))
    }

    #[tokio::test]
    async fn finds_language_by_code() {
        let handler = GetLanguageHandler::new(store_with_spanish());
        let language = handler
            .handle(GetLanguageQuery {
                code: "es".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(language.name, "Spanish");
    }

    #[tokio::test]
    async fn unknown_code_is_not_found() {
        let handler = GetLanguageHandler::new(store_with_spanish());
        let err = handler
            .handle(GetLanguageQuery {
                code: "xx".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::LanguageNotFound);
    }
}
