//! HTTP DTOs for conversation endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing
//! independent evolution. Response envelopes mirror what the frontend
//! consumes: `{ "conversation": ... }`, `{ "conversations": [...] }`,
//! `{ "types": [...] }`.

use serde::{Deserialize, Serialize};

use crate::adapters::http::catalog::dto::{ConversationTypeResponse, LanguageResponse};
use crate::domain::conversation::Transcript;
use crate::domain::foundation::ConversationStatus;
use crate::ports::{ConversationDetail, ConversationView};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to start a new conversation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateConversationRequest {
    pub language_id: String,
    pub type_id: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One transcript line in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptResponse {
    pub id: String,
    pub speaker: String,
    pub text: String,
    pub timestamp: String,
}

impl From<Transcript> for TranscriptResponse {
    fn from(t: Transcript) -> Self {
        Self {
            id: t.id.to_string(),
            speaker: match t.speaker {
                crate::domain::conversation::Speaker::User => "user".to_string(),
                crate::domain::conversation::Speaker::Partner => "partner".to_string(),
            },
            text: t.text,
            timestamp: t.timestamp.as_datetime().to_rfc3339(),
        }
    }
}

/// A conversation with embedded reference data.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationResponse {
    pub id: String,
    pub user_id: String,
    pub language: LanguageResponse,
    #[serde(rename = "type")]
    pub conversation_type: ConversationTypeResponse,
    pub status: ConversationStatus,
    pub started_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcripts: Option<Vec<TranscriptResponse>>,
}

impl From<ConversationView> for ConversationResponse {
    fn from(view: ConversationView) -> Self {
        Self {
            id: view.id.to_string(),
            user_id: view.user_id.to_string(),
            language: view.language.into(),
            conversation_type: view.conversation_type.into(),
            status: view.status,
            started_at: view.started_at.as_datetime().to_rfc3339(),
            ended_at: view.ended_at.map(|t| t.as_datetime().to_rfc3339()),
            duration_seconds: view.duration_seconds,
            transcripts: None,
        }
    }
}

impl From<ConversationDetail> for ConversationResponse {
    fn from(detail: ConversationDetail) -> Self {
        let mut response: ConversationResponse = detail.conversation.into();
        response.transcripts = Some(
            detail
                .transcripts
                .into_iter()
                .map(TranscriptResponse::from)
                .collect(),
        );
        response
    }
}

/// Envelope for a single conversation.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationEnvelope {
    pub conversation: ConversationResponse,
}

/// Envelope for a conversation list.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationListEnvelope {
    pub conversations: Vec<ConversationResponse>,
}

/// Envelope for the scenario type catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationTypesEnvelope {
    pub types: Vec<ConversationTypeResponse>,
}
