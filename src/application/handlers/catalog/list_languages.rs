//! ListLanguagesHandler - Query handler for the active language catalog.

use std::sync::Arc;

use crate::domain::catalog::Language;
use crate::domain::foundation::DomainError;
use crate::ports::CatalogReader;

/// Handler for listing active languages, ordered by name.
pub struct ListLanguagesHandler {
    catalog: Arc<dyn CatalogReader>,
}

impl ListLanguagesHandler {
    pub fn new(catalog: Arc<dyn CatalogReader>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self) -> Result<Vec<Language>, DomainError> {
        self.catalog.list_languages().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPracticeStore;
    use crate::domain::foundation::LanguageId;

    #[tokio::test]
    async fn lists_active_languages() {
        let store = Arc::new(InMemoryPracticeStore::with_catalog(
            vec![
                Language {
                    id: LanguageId::new(),
                    code: "es".to_string(),
                    name: "Spanish".to_string(),
                    native_name: "Español".to_string(),
                    is_active: true,
                },
                Language {
                    id: LanguageId::new(),
                    code: "la".to_string(),
                    name: "Latin".to_string(),
                    native_name: "Latina".to_string(),
                    is_active: false,
                },
            ],
            vec![],
        ));

        let handler = ListLanguagesHandler::new(store);
        let languages = handler.handle().await.unwrap();

        assert_eq!(languages.len(), 1);
        assert_eq!(languages[0].code, "es");
    }
}
