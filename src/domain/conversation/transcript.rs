//! Transcript entries attached to a conversation.
//!
//! Written by the realtime session component, which is outside this
//! repository; here they are read-only and embedded in conversation
//! detail views ordered by timestamp.

use crate::domain::foundation::{ConversationId, Timestamp, TranscriptId};
use serde::{Deserialize, Serialize};

/// Who produced a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Partner,
}

/// One line of a conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub id: TranscriptId,
    pub conversation_id: ConversationId,
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: Timestamp,
}
