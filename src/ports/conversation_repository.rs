//! Conversation repository port (write side).
//!
//! Defines the contract for persisting Conversation aggregates and for the
//! one mutation the lifecycle allows: completing an active session.
//!
//! # Design
//!
//! - **Compare-and-swap transition**: `complete_active` must apply the
//!   Active -> Completed transition conditionally on the row still being
//!   Active, never as a read-then-write pair
//! - **Transition and fold are one unit**: the same call folds the
//!   completion into the (user, language) progress row; implementations
//!   must make both visible atomically or neither

use crate::domain::conversation::{Conversation, SessionCompletion};
use crate::domain::foundation::{ConversationId, DomainError, UserId};
use async_trait::async_trait;

/// Repository port for Conversation aggregate persistence.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Save a newly started conversation.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, conversation: &Conversation) -> Result<(), DomainError>;

    /// Find a conversation by id, scoped to its owner.
    ///
    /// Returns `None` when the conversation does not exist **or** belongs
    /// to another user - callers cannot distinguish the two.
    async fn find_owned(
        &self,
        id: &ConversationId,
        user_id: &UserId,
    ) -> Result<Option<Conversation>, DomainError>;

    /// Atomically complete an active conversation and fold the result
    /// into the owner's progress for the practiced language.
    ///
    /// The status update must carry the `status = Active` condition so
    /// that of two concurrent completions exactly one wins; the loser
    /// observes `None`. The progress fold (insert-or-increment keyed by
    /// (user, language), `last_session_at` taking the maximum) must
    /// commit in the same transaction as the transition: a failure in
    /// either leaves both unapplied.
    ///
    /// Returns the updated conversation, or `None` when it is missing,
    /// not owned by `user_id`, or no longer Active.
    ///
    /// # Errors
    ///
    /// - `InvariantViolation` if the fold yields negative counters
    /// - `DatabaseError` on persistence failure
    async fn complete_active(
        &self,
        id: &ConversationId,
        user_id: &UserId,
        completion: &SessionCompletion,
    ) -> Result<Option<Conversation>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn conversation_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ConversationRepository) {}
    }
}
