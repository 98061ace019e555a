//! Conversation reader port (read side / queries).
//!
//! Read-optimized views of conversations with reference data embedded,
//! for listings and detail display.

use crate::domain::catalog::{ConversationType, Language};
use crate::domain::conversation::Transcript;
use crate::domain::foundation::{
    ConversationId, ConversationStatus, DomainError, Timestamp, UserId,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Reader port for conversation queries.
///
/// All queries are scoped to the owning user; a conversation another user
/// owns is indistinguishable from one that does not exist.
#[async_trait]
pub trait ConversationReader: Send + Sync {
    /// Get a conversation with transcripts, scoped to its owner.
    ///
    /// Returns `None` if not found or not owned.
    async fn get_owned(
        &self,
        id: &ConversationId,
        user_id: &UserId,
    ) -> Result<Option<ConversationDetail>, DomainError>;

    /// List a user's conversations, most recently started first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<ConversationView>, DomainError>;
}

/// A conversation with its reference data embedded, as returned by every
/// caller-facing operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationView {
    pub id: ConversationId,
    pub user_id: UserId,
    pub language: Language,
    pub conversation_type: ConversationType,
    pub status: ConversationStatus,
    pub started_at: Timestamp,
    pub ended_at: Option<Timestamp>,
    pub duration_seconds: Option<i64>,
}

/// A conversation view plus its transcript, ordered by timestamp
/// ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationDetail {
    #[serde(flatten)]
    pub conversation: ConversationView,
    pub transcripts: Vec<Transcript>,
}
