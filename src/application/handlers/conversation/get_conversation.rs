//! GetConversationHandler - Query handler for a single conversation.

use std::sync::Arc;

use crate::domain::conversation::ConversationError;
use crate::domain::foundation::{ConversationId, UserId};
use crate::ports::{ConversationDetail, ConversationReader};

/// Query for one owned conversation with its transcript.
#[derive(Debug, Clone)]
pub struct GetConversationQuery {
    pub user_id: UserId,
    pub conversation_id: ConversationId,
}

/// Handler for fetching a single conversation.
pub struct GetConversationHandler {
    reader: Arc<dyn ConversationReader>,
}

impl GetConversationHandler {
    pub fn new(reader: Arc<dyn ConversationReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetConversationQuery,
    ) -> Result<ConversationDetail, ConversationError> {
        self.reader
            .get_owned(&query.conversation_id, &query.user_id)
            .await?
            .ok_or(ConversationError::NotFound(query.conversation_id))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{test_language, test_type};
    use super::*;
    use crate::adapters::memory::InMemoryPracticeStore;
    use crate::domain::conversation::{Conversation, Speaker, Transcript};
    use crate::domain::foundation::{Timestamp, TranscriptId};
    use crate::ports::ConversationRepository;

    #[tokio::test]
    async fn returns_detail_with_ordered_transcripts() {
        let language = test_language("es", "Spanish");
        let conversation_type = test_type("Casual Conversation", 1);
        let store = Arc::new(InMemoryPracticeStore::with_catalog(
            vec![language.clone()],
            vec![conversation_type.clone()],
        ));

        let user_id = UserId::new();
        let conversation = Conversation::start(
            ConversationId::new(),
            user_id,
            language.id,
            conversation_type.id,
            Timestamp::from_unix_secs(1_000),
        );
        store.insert(&conversation).await.unwrap();

        // Inserted out of order; the reader sorts by timestamp.
        store.add_transcript(Transcript {
            id: TranscriptId::new(),
            conversation_id: *conversation.id(),
            speaker: Speaker::Partner,
            text: "¿Cómo estás?".to_string(),
            timestamp: Timestamp::from_unix_secs(1_010),
        });
        store.add_transcript(Transcript {
            id: TranscriptId::new(),
            conversation_id: *conversation.id(),
            speaker: Speaker::User,
            text: "Hola".to_string(),
            timestamp: Timestamp::from_unix_secs(1_005),
        });

        let handler = GetConversationHandler::new(store);
        let detail = handler
            .handle(GetConversationQuery {
                user_id,
                conversation_id: *conversation.id(),
            })
            .await
            .unwrap();

        assert_eq!(detail.conversation.id, *conversation.id());
        assert_eq!(detail.transcripts.len(), 2);
        assert_eq!(detail.transcripts[0].text, "Hola");
        assert_eq!(detail.transcripts[1].text, "¿Cómo estás?");
    }

    #[tokio::test]
    async fn foreign_conversation_is_not_found() {
        let language = test_language("es", "Spanish");
        let conversation_type = test_type("Casual Conversation", 1);
        let store = Arc::new(InMemoryPracticeStore::with_catalog(
            vec![language.clone()],
            vec![conversation_type.clone()],
        ));

        let conversation = Conversation::start(
            ConversationId::new(),
            UserId::new(),
            language.id,
            conversation_type.id,
            Timestamp::now(),
        );
        store.insert(&conversation).await.unwrap();

        let handler = GetConversationHandler::new(store);
        let result = handler
            .handle(GetConversationQuery {
                user_id: UserId::new(),
                conversation_id: *conversation.id(),
            })
            .await;

        assert!(matches!(result, Err(ConversationError::NotFound(_))));
    }
}
