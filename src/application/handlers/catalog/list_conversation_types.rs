//! ListConversationTypesHandler - Query handler for scenario types.

use std::sync::Arc;

use crate::domain::catalog::ConversationType;
use crate::domain::foundation::DomainError;
use crate::ports::CatalogReader;

/// Handler for listing active conversation types, easiest first.
pub struct ListConversationTypesHandler {
    catalog: Arc<dyn CatalogReader>,
}

impl ListConversationTypesHandler {
    pub fn new(catalog: Arc<dyn CatalogReader>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self) -> Result<Vec<ConversationType>, DomainError> {
        self.catalog.list_conversation_types().await
    }
}
