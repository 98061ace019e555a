//! HTTP handlers for language catalog endpoints. All public.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::catalog::{
    GetLanguageHandler, GetLanguageQuery, ListLanguagesHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode};

use super::dto::{LanguageEnvelope, LanguagesEnvelope};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CatalogHandlers {
    list_handler: Arc<ListLanguagesHandler>,
    get_handler: Arc<GetLanguageHandler>,
}

impl CatalogHandlers {
    pub fn new(list_handler: Arc<ListLanguagesHandler>, get_handler: Arc<GetLanguageHandler>) -> Self {
        Self {
            list_handler,
            get_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/languages - List active languages
pub async fn list_languages(State(handlers): State<CatalogHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(languages) => (
            StatusCode::OK,
            Json(LanguagesEnvelope {
                languages: languages.into_iter().map(Into::into).collect(),
            }),
        )
            .into_response(),
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/languages/:code - Get one language by ISO code
pub async fn get_language(
    State(handlers): State<CatalogHandlers>,
    Path(code): Path<String>,
) -> Response {
    match handlers.get_handler.handle(GetLanguageQuery { code }).await {
        Ok(language) => (
            StatusCode::OK,
            Json(LanguageEnvelope {
                language: language.into(),
            }),
        )
            .into_response(),
        Err(e) => handle_catalog_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_catalog_error(error: DomainError) -> Response {
    match error.code {
        ErrorCode::LanguageNotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Language not found")),
        )
            .into_response(),
        _ => {
            tracing::error!("catalog error: {}", error);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response()
        }
    }
}
