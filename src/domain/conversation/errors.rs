//! Conversation-specific error types.

use crate::domain::foundation::{
    ConversationId, ConversationTypeId, DomainError, ErrorCode, LanguageId,
};

/// Conversation lifecycle errors.
///
/// `AlreadyCompleted` and `NotFound` are distinct internally (the first is
/// a lost compare-and-swap worth logging), but callers must not be able to
/// tell them apart - the HTTP layer renders both as the same not-found
/// response to avoid leaking the existence of other users' sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationError {
    /// Conversation missing, or not owned by the caller.
    NotFound(ConversationId),
    /// Referenced language does not exist.
    LanguageNotFound(LanguageId),
    /// Referenced conversation type does not exist.
    TypeNotFound(ConversationTypeId),
    /// Conversation exists but is already in the terminal state.
    AlreadyCompleted(ConversationId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// The progress fold produced counters inconsistent with its contract.
    InvariantViolation(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl ConversationError {
    pub fn not_found(id: ConversationId) -> Self {
        ConversationError::NotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConversationError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ConversationError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ConversationError::NotFound(_) => ErrorCode::ConversationNotFound,
            ConversationError::LanguageNotFound(_) => ErrorCode::LanguageNotFound,
            ConversationError::TypeNotFound(_) => ErrorCode::ConversationTypeNotFound,
            ConversationError::AlreadyCompleted(_) => ErrorCode::ConversationCompleted,
            ConversationError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ConversationError::InvariantViolation(_) => ErrorCode::InvariantViolation,
            ConversationError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ConversationError::NotFound(id) => format!("Conversation not found: {}", id),
            ConversationError::LanguageNotFound(id) => format!("Language not found: {}", id),
            ConversationError::TypeNotFound(id) => {
                format!("Conversation type not found: {}", id)
            }
            ConversationError::AlreadyCompleted(id) => {
                format!("Conversation already completed: {}", id)
            }
            ConversationError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ConversationError::InvariantViolation(msg) => {
                format!("Progress invariant violated: {}", msg)
            }
            ConversationError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ConversationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ConversationError {}

impl From<DomainError> for ConversationError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvariantViolation => ConversationError::InvariantViolation(err.message),
            _ => ConversationError::Infrastructure(err.to_string()),
        }
    }
}
