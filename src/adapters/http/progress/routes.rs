//! HTTP routes for progress and statistics endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_stats, list_progress, ProgressHandlers};

/// Creates the user progress router with all endpoints.
pub fn progress_routes(handlers: ProgressHandlers) -> Router {
    Router::new()
        .route("/progress", get(list_progress))
        .route("/stats", get(get_stats))
        .with_state(handlers)
}
