//! Reference data: practice languages and conversation scenario types.
//!
//! Read-only from the engine's perspective. The only rule the engine
//! enforces against these is referential existence at conversation
//! creation time; `difficulty_level` is used purely for ordering at read
//! time.

use crate::domain::foundation::{ConversationTypeId, LanguageId};
use serde::{Deserialize, Serialize};

/// A language available for practice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: LanguageId,
    /// ISO 639-1 code, e.g. "es".
    pub code: String,
    /// English name, e.g. "Spanish".
    pub name: String,
    /// Self-referential name, e.g. "Español".
    pub native_name: String,
    /// Inactive languages are hidden from listings but stay referenceable
    /// by existing conversations.
    pub is_active: bool,
}

/// A conversation scenario, e.g. "Travel Scenarios" or "Job Interview".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationType {
    pub id: ConversationTypeId,
    pub name: String,
    pub description: String,
    /// 1 (easiest) to 5; listings order by this ascending.
    pub difficulty_level: i32,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_serializes_roundtrip() {
        let language = Language {
            id: LanguageId::new(),
            code: "es".to_string(),
            name: "Spanish".to_string(),
            native_name: "Español".to_string(),
            is_active: true,
        };
        let json = serde_json::to_string(&language).unwrap();
        let back: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(back, language);
    }

    #[test]
    fn conversation_type_serializes_difficulty() {
        let ct = ConversationType {
            id: ConversationTypeId::new(),
            name: "Casual Conversation".to_string(),
            description: "Everyday topics".to_string(),
            difficulty_level: 1,
            is_active: true,
        };
        let json = serde_json::to_value(&ct).unwrap();
        assert_eq!(json["difficulty_level"], 1);
    }
}
