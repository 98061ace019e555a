//! HTTP DTOs for progress and statistics endpoints.

use serde::Serialize;

use crate::adapters::http::catalog::dto::LanguageResponse;
use crate::domain::progress::PracticeStats;
use crate::ports::ProgressView;

/// One per-language progress row.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressResponse {
    pub language: LanguageResponse,
    pub sessions_count: i64,
    pub total_duration_minutes: i64,
    pub last_session_at: String,
}

impl From<ProgressView> for ProgressResponse {
    fn from(view: ProgressView) -> Self {
        Self {
            language: view.language.into(),
            sessions_count: view.sessions_count,
            total_duration_minutes: view.total_duration_minutes,
            last_session_at: view.last_session_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Envelope for the progress listing.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressEnvelope {
    pub progress: Vec<ProgressResponse>,
}

/// Aggregate statistics body.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub total_conversations: i64,
    pub total_minutes: i64,
    pub languages_practiced: i64,
}

impl From<PracticeStats> for StatsResponse {
    fn from(stats: PracticeStats) -> Self {
        Self {
            total_conversations: stats.total_conversations,
            total_minutes: stats.total_minutes,
            languages_practiced: stats.languages_practiced,
        }
    }
}

/// Envelope for the statistics endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct StatsEnvelope {
    pub stats: StatsResponse,
}
