//! Conversation command and query handlers.
//!
//! The session lifecycle engine: starting sessions against validated
//! reference data, the CAS-guarded completion with its progress fold, and
//! the owner-scoped read paths.

mod end_conversation;
mod get_conversation;
mod list_conversations;
mod start_conversation;

pub use end_conversation::{EndConversationCommand, EndConversationHandler};
pub use get_conversation::{GetConversationHandler, GetConversationQuery};
pub use list_conversations::{ListConversationsHandler, ListConversationsQuery};
pub use start_conversation::{StartConversationCommand, StartConversationHandler};

use crate::domain::catalog::{ConversationType, Language};
use crate::domain::conversation::Conversation;
use crate::ports::ConversationView;

/// Assembles the caller-facing view of a conversation with its reference
/// data embedded.
pub(crate) fn view_of(
    conversation: &Conversation,
    language: Language,
    conversation_type: ConversationType,
) -> ConversationView {
    ConversationView {
        id: *conversation.id(),
        user_id: *conversation.user_id(),
        language,
        conversation_type,
        status: conversation.status(),
        started_at: *conversation.started_at(),
        ended_at: conversation.ended_at().copied(),
        duration_seconds: conversation.duration_seconds(),
    }
}
