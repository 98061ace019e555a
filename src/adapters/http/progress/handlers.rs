//! HTTP handlers for progress and statistics endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::progress::{
    GetStatsHandler, GetStatsQuery, ListProgressHandler, ListProgressQuery,
};
use crate::domain::foundation::{DomainError, ErrorCode};

use super::dto::{ProgressEnvelope, StatsEnvelope};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ProgressHandlers {
    list_handler: Arc<ListProgressHandler>,
    stats_handler: Arc<GetStatsHandler>,
}

impl ProgressHandlers {
    pub fn new(list_handler: Arc<ListProgressHandler>, stats_handler: Arc<GetStatsHandler>) -> Self {
        Self {
            list_handler,
            stats_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/users/progress - Per-language progress rows
pub async fn list_progress(
    State(handlers): State<ProgressHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ListProgressQuery { user_id: user.id };

    match handlers.list_handler.handle(query).await {
        Ok(views) => (
            StatusCode::OK,
            Json(ProgressEnvelope {
                progress: views.into_iter().map(Into::into).collect(),
            }),
        )
            .into_response(),
        Err(e) => handle_progress_error(e),
    }
}

/// GET /api/users/stats - Aggregate practice statistics
pub async fn get_stats(
    State(handlers): State<ProgressHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetStatsQuery { user_id: user.id };

    match handlers.stats_handler.handle(query).await {
        Ok(stats) => (
            StatusCode::OK,
            Json(StatsEnvelope {
                stats: stats.into(),
            }),
        )
            .into_response(),
        Err(e) => handle_progress_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_progress_error(error: DomainError) -> Response {
    if error.code == ErrorCode::InvariantViolation {
        tracing::error!("statistics invariant violation: {}", error);
    } else {
        tracing::error!("progress error: {}", error);
    }
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response()
}
