//! HTTP routes for language catalog endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_language, list_languages, CatalogHandlers};

/// Creates the language router with all endpoints.
pub fn language_routes(handlers: CatalogHandlers) -> Router {
    Router::new()
        .route("/", get(list_languages))
        .route("/:code", get(get_language))
        .with_state(handlers)
}
