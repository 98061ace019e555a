//! HTTP DTOs for reference data, shared by the catalog and conversation
//! endpoints.

use serde::Serialize;

use crate::domain::catalog::{ConversationType, Language};

/// Language reference data in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageResponse {
    pub id: String,
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub is_active: bool,
}

impl From<Language> for LanguageResponse {
    fn from(language: Language) -> Self {
        Self {
            id: language.id.to_string(),
            code: language.code,
            name: language.name,
            native_name: language.native_name,
            is_active: language.is_active,
        }
    }
}

/// Conversation type reference data in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationTypeResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub difficulty_level: i32,
    pub is_active: bool,
}

impl From<ConversationType> for ConversationTypeResponse {
    fn from(ct: ConversationType) -> Self {
        Self {
            id: ct.id.to_string(),
            name: ct.name,
            description: ct.description,
            difficulty_level: ct.difficulty_level,
            is_active: ct.is_active,
        }
    }
}

/// Envelope for the language catalog.
#[derive(Debug, Clone, Serialize)]
pub struct LanguagesEnvelope {
    pub languages: Vec<LanguageResponse>,
}

/// Envelope for a single language.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageEnvelope {
    pub language: LanguageResponse,
}
