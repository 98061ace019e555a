//! ListConversationsHandler - Query handler for a user's conversations.

use std::sync::Arc;

use crate::domain::conversation::ConversationError;
use crate::domain::foundation::UserId;
use crate::ports::{ConversationReader, ConversationView};

/// Query for a user's conversations, most recently started first.
#[derive(Debug, Clone)]
pub struct ListConversationsQuery {
    pub user_id: UserId,
}

/// Handler for listing conversations.
pub struct ListConversationsHandler {
    reader: Arc<dyn ConversationReader>,
}

impl ListConversationsHandler {
    pub fn new(reader: Arc<dyn ConversationReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: ListConversationsQuery,
    ) -> Result<Vec<ConversationView>, ConversationError> {
        Ok(self.reader.list_by_user(&query.user_id).await?)
    }
}
