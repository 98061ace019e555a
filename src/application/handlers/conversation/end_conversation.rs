//! EndConversationHandler - Command handler for completing practice sessions.
//!
//! The one mutation the lifecycle allows. The handler computes the
//! duration from the immutable `started_at`, then delegates the
//! Active -> Completed transition and the progress fold to the
//! repository's atomic `complete_active`. Losing the compare-and-swap
//! (a concurrent completion got there first) is reported to the caller
//! as the same not-found outcome as a missing or foreign conversation.

use std::sync::Arc;

use crate::domain::conversation::ConversationError;
use crate::domain::foundation::{ConversationId, Timestamp, UserId};
use crate::ports::{ConversationDetail, ConversationReader, ConversationRepository};

/// Command to end an active practice conversation.
#[derive(Debug, Clone)]
pub struct EndConversationCommand {
    pub user_id: UserId,
    pub conversation_id: ConversationId,
}

/// Handler for ending conversations.
pub struct EndConversationHandler {
    repository: Arc<dyn ConversationRepository>,
    reader: Arc<dyn ConversationReader>,
}

impl EndConversationHandler {
    pub fn new(
        repository: Arc<dyn ConversationRepository>,
        reader: Arc<dyn ConversationReader>,
    ) -> Self {
        Self { repository, reader }
    }

    pub async fn handle(
        &self,
        cmd: EndConversationCommand,
    ) -> Result<ConversationDetail, ConversationError> {
        let mut conversation = self
            .repository
            .find_owned(&cmd.conversation_id, &cmd.user_id)
            .await?
            .ok_or(ConversationError::NotFound(cmd.conversation_id))?;

        // Duration is derived from the fetched aggregate; started_at is
        // immutable, so a concurrent completion cannot skew it - it can
        // only make the conditional update below match zero rows.
        let completion = match conversation.complete(Timestamp::now()) {
            Ok(completion) => completion,
            Err(ConversationError::AlreadyCompleted(id)) => {
                return Err(ConversationError::NotFound(id));
            }
            Err(e) => return Err(e),
        };

        let updated = self
            .repository
            .complete_active(&cmd.conversation_id, &cmd.user_id, &completion)
            .await?;

        let updated = match updated {
            Some(updated) => updated,
            None => {
                // Lost the compare-and-swap to a concurrent completion.
                tracing::debug!(
                    conversation_id = %cmd.conversation_id,
                    "completion lost status compare-and-swap"
                );
                return Err(ConversationError::NotFound(cmd.conversation_id));
            }
        };

        tracing::debug!(
            conversation_id = %updated.id(),
            user_id = %cmd.user_id,
            duration_seconds = completion.duration_seconds,
            "practice session completed"
        );

        self.reader
            .get_owned(&cmd.conversation_id, &cmd.user_id)
            .await?
            .ok_or_else(|| {
                // Conversations are never deleted, so a vanished row after a
                // successful completion is a store-level fault.
                ConversationError::infrastructure(format!(
                    "completed conversation vanished: {}",
                    cmd.conversation_id
                ))
            })
    }
}
