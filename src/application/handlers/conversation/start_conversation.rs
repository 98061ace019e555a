//! StartConversationHandler - Command handler for starting practice sessions.

use std::sync::Arc;

use crate::domain::conversation::{Conversation, ConversationError};
use crate::domain::foundation::{ConversationId, ConversationTypeId, LanguageId, Timestamp, UserId};
use crate::ports::{CatalogReader, ConversationRepository, ConversationView};

use super::view_of;

/// Command to start a new practice conversation.
#[derive(Debug, Clone)]
pub struct StartConversationCommand {
    pub user_id: UserId,
    pub language_id: LanguageId,
    pub type_id: ConversationTypeId,
}

/// Handler for starting conversations.
pub struct StartConversationHandler {
    repository: Arc<dyn ConversationRepository>,
    catalog: Arc<dyn CatalogReader>,
}

impl StartConversationHandler {
    pub fn new(
        repository: Arc<dyn ConversationRepository>,
        catalog: Arc<dyn CatalogReader>,
    ) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    /// Validates the referenced language and scenario, then inserts a new
    /// Active conversation. Never touches progress, and never coalesces
    /// with an existing session - every call creates a distinct one.
    pub async fn handle(
        &self,
        cmd: StartConversationCommand,
    ) -> Result<ConversationView, ConversationError> {
        let language = self
            .catalog
            .find_language(&cmd.language_id)
            .await?
            .ok_or(ConversationError::LanguageNotFound(cmd.language_id))?;

        let conversation_type = self
            .catalog
            .find_conversation_type(&cmd.type_id)
            .await?
            .ok_or(ConversationError::TypeNotFound(cmd.type_id))?;

        let conversation = Conversation::start(
            ConversationId::new(),
            cmd.user_id,
            cmd.language_id,
            cmd.type_id,
            Timestamp::now(),
        );

        self.repository.insert(&conversation).await?;

        tracing::debug!(
            conversation_id = %conversation.id(),
            user_id = %cmd.user_id,
            language = %language.code,
            "practice session started"
        );

        Ok(view_of(&conversation, language, conversation_type))
    }
}
