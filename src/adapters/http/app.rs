//! Router assembly: resource routers, health check, and middleware stack.

use std::time::Duration;

use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{middleware, routing::get, Json, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::auth::{auth_routes, AuthHandlers};
use super::catalog::{language_routes, CatalogHandlers};
use super::conversation::{conversation_routes, ConversationHandlers};
use super::error::ErrorResponse;
use super::middleware::{auth_middleware, AuthState};
use super::progress::{progress_routes, ProgressHandlers};

/// Everything the HTTP surface needs, wired at startup.
pub struct ApiContext {
    pub auth: AuthHandlers,
    pub catalog: CatalogHandlers,
    pub conversations: ConversationHandlers,
    pub progress: ProgressHandlers,
    pub validator: AuthState,
    /// Exact allowed origins; empty means permissive (development).
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
}

/// Builds the full application router.
///
/// The auth middleware runs on every route; public routes simply never
/// ask for the injected user, protected handlers enforce it with
/// `RequireAuth`.
pub fn api_router(ctx: ApiContext) -> Router {
    let cors = if ctx.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = ctx
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .nest("/api/auth", auth_routes(ctx.auth))
        .nest("/api/languages", language_routes(ctx.catalog))
        .nest("/api/conversations", conversation_routes(ctx.conversations))
        .nest("/api/users", progress_routes(ctx.progress))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(ctx.validator, auth_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::new(ctx.request_timeout))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// GET /health - liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Unmatched routes return a JSON 404 rather than an empty body.
async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found("Route not found")),
    )
        .into_response()
}
