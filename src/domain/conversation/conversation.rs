//! Conversation aggregate entity.
//!
//! A conversation is one timed practice session between a user and a
//! (language, scenario) pair. It is created Active, mutated exactly once
//! on completion by its owner, and never deleted.
//!
//! # Invariants
//!
//! - `ended_at` and `duration_seconds` are set if and only if the status
//!   is Completed
//! - `duration_seconds` is the floor of the whole seconds between
//!   `started_at` and `ended_at`, clamped to zero under clock skew
//! - status only transitions Active -> Completed, never back

use crate::domain::foundation::{
    ConversationId, ConversationStatus, ConversationTypeId, LanguageId, Timestamp, UserId,
};
use serde::{Deserialize, Serialize};

use super::errors::ConversationError;

/// Conversation aggregate - one timed practice session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique identifier for this conversation.
    id: ConversationId,

    /// User who owns this conversation.
    user_id: UserId,

    /// Language being practiced.
    language_id: LanguageId,

    /// Scenario type of the session.
    type_id: ConversationTypeId,

    /// Current status (Active or Completed).
    status: ConversationStatus,

    /// When the session started.
    started_at: Timestamp,

    /// When the session ended. None while Active.
    ended_at: Option<Timestamp>,

    /// Session length in whole seconds. None while Active.
    duration_seconds: Option<i64>,
}

/// The persisted outcome of ending a session: the final timestamps and
/// the duration the progress fold is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionCompletion {
    pub ended_at: Timestamp,
    pub duration_seconds: i64,
}

/// Whole seconds between two timestamps, floored and clamped to zero.
///
/// A negative delta is possible under clock skew and must never propagate
/// into a stored duration.
pub fn duration_between(started_at: &Timestamp, ended_at: &Timestamp) -> i64 {
    ended_at.duration_since(started_at).num_seconds().max(0)
}

impl Conversation {
    /// Create a new active conversation starting now.
    pub fn start(
        id: ConversationId,
        user_id: UserId,
        language_id: LanguageId,
        type_id: ConversationTypeId,
        started_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            language_id,
            type_id,
            status: ConversationStatus::Active,
            started_at,
            ended_at: None,
            duration_seconds: None,
        }
    }

    /// Reconstitute a conversation from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ConversationId,
        user_id: UserId,
        language_id: LanguageId,
        type_id: ConversationTypeId,
        status: ConversationStatus,
        started_at: Timestamp,
        ended_at: Option<Timestamp>,
        duration_seconds: Option<i64>,
    ) -> Self {
        Self {
            id,
            user_id,
            language_id,
            type_id,
            status,
            started_at,
            ended_at,
            duration_seconds,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the conversation ID.
    pub fn id(&self) -> &ConversationId {
        &self.id
    }

    /// Returns the owner's user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the practiced language ID.
    pub fn language_id(&self) -> &LanguageId {
        &self.language_id
    }

    /// Returns the scenario type ID.
    pub fn type_id(&self) -> &ConversationTypeId {
        &self.type_id
    }

    /// Returns the current status.
    pub fn status(&self) -> ConversationStatus {
        self.status
    }

    /// Returns when the session started.
    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// Returns when the session ended, if completed.
    pub fn ended_at(&self) -> Option<&Timestamp> {
        self.ended_at.as_ref()
    }

    /// Returns the session length in seconds, if completed.
    pub fn duration_seconds(&self) -> Option<i64> {
        self.duration_seconds
    }

    /// Checks if the given user owns this conversation.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Complete the session at the given end time.
    ///
    /// Computes the clamped duration, transitions Active -> Completed, and
    /// returns the completion record the progress fold is derived from.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` if the conversation is not Active
    pub fn complete(&mut self, ended_at: Timestamp) -> Result<SessionCompletion, ConversationError> {
        if !self
            .status
            .can_transition_to(&ConversationStatus::Completed)
        {
            return Err(ConversationError::AlreadyCompleted(self.id));
        }

        let duration_seconds = duration_between(&self.started_at, &ended_at);

        self.status = ConversationStatus::Completed;
        self.ended_at = Some(ended_at);
        self.duration_seconds = Some(duration_seconds);

        Ok(SessionCompletion {
            ended_at,
            duration_seconds,
        })
    }
}
