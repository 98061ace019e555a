//! ConversationStatus enum for tracking the lifecycle of practice sessions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a practice conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConversationStatus {
    #[default]
    Active,
    Completed,
}

impl ConversationStatus {
    /// Returns true if this status is terminal (no further transitions).
    pub fn is_terminal(&self) -> bool {
        matches!(self, ConversationStatus::Completed)
    }

    /// Validates a transition from this status to another.
    ///
    /// Valid transitions:
    /// - Active -> Completed
    pub fn can_transition_to(&self, target: &ConversationStatus) -> bool {
        use ConversationStatus::*;
        matches!((self, target), (Active, Completed))
    }
}

impl fmt::Display for ConversationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConversationStatus::Active => "Active",
            ConversationStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_active() {
        assert_eq!(ConversationStatus::default(), ConversationStatus::Active);
    }

    #[test]
    fn completed_is_terminal() {
        assert!(!ConversationStatus::Active.is_terminal());
        assert!(ConversationStatus::Completed.is_terminal());
    }

    #[test]
    fn active_can_transition_to_completed() {
        assert!(ConversationStatus::Active.can_transition_to(&ConversationStatus::Completed));
    }

    #[test]
    fn completed_cannot_transition_anywhere() {
        assert!(!ConversationStatus::Completed.can_transition_to(&ConversationStatus::Active));
        assert!(!ConversationStatus::Completed.can_transition_to(&ConversationStatus::Completed));
    }

    #[test]
    fn active_cannot_transition_to_active() {
        assert!(!ConversationStatus::Active.can_transition_to(&ConversationStatus::Active));
    }

    #[test]
    fn serializes_to_screaming_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&ConversationStatus::Active).unwrap(),
            "\"ACTIVE\""
        );
        assert_eq!(
            serde_json::to_string(&ConversationStatus::Completed).unwrap(),
            "\"COMPLETED\""
        );
    }

    #[test]
    fn deserializes_from_screaming_snake_case_json() {
        let status: ConversationStatus = serde_json::from_str("\"ACTIVE\"").unwrap();
        assert_eq!(status, ConversationStatus::Active);

        let status: ConversationStatus = serde_json::from_str("\"COMPLETED\"").unwrap();
        assert_eq!(status, ConversationStatus::Completed);
    }
}
