//! HTTP handlers for conversation endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::catalog::ListConversationTypesHandler;
use crate::application::handlers::conversation::{
    EndConversationCommand, EndConversationHandler, GetConversationHandler, GetConversationQuery,
    ListConversationsHandler, ListConversationsQuery, StartConversationCommand,
    StartConversationHandler,
};
use crate::domain::conversation::ConversationError;
use crate::domain::foundation::{ConversationId, ConversationTypeId, LanguageId};

use super::dto::{
    ConversationEnvelope, ConversationListEnvelope, ConversationResponse,
    ConversationTypesEnvelope, CreateConversationRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ConversationHandlers {
    start_handler: Arc<StartConversationHandler>,
    end_handler: Arc<EndConversationHandler>,
    get_handler: Arc<GetConversationHandler>,
    list_handler: Arc<ListConversationsHandler>,
    types_handler: Arc<ListConversationTypesHandler>,
}

impl ConversationHandlers {
    pub fn new(
        start_handler: Arc<StartConversationHandler>,
        end_handler: Arc<EndConversationHandler>,
        get_handler: Arc<GetConversationHandler>,
        list_handler: Arc<ListConversationsHandler>,
        types_handler: Arc<ListConversationTypesHandler>,
    ) -> Self {
        Self {
            start_handler,
            end_handler,
            get_handler,
            list_handler,
            types_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/conversations/types - List scenario types (public)
pub async fn list_conversation_types(State(handlers): State<ConversationHandlers>) -> Response {
    match handlers.types_handler.handle().await {
        Ok(types) => (
            StatusCode::OK,
            Json(ConversationTypesEnvelope {
                types: types.into_iter().map(Into::into).collect(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to list conversation types: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response()
        }
    }
}

/// POST /api/conversations - Start a new conversation
pub async fn create_conversation(
    State(handlers): State<ConversationHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreateConversationRequest>,
) -> Response {
    // Unparseable ids cannot resolve to reference data, so they get the
    // same not-found response as unknown ones.
    let (language_id, type_id) = match (
        req.language_id.parse::<LanguageId>(),
        req.type_id.parse::<ConversationTypeId>(),
    ) {
        (Ok(language_id), Ok(type_id)) => (language_id, type_id),
        _ => return reference_not_found(),
    };

    let cmd = StartConversationCommand {
        user_id: user.id,
        language_id,
        type_id,
    };

    match handlers.start_handler.handle(cmd).await {
        Ok(view) => (
            StatusCode::CREATED,
            Json(ConversationEnvelope {
                conversation: view.into(),
            }),
        )
            .into_response(),
        Err(e) => handle_conversation_error(e),
    }
}

/// GET /api/conversations - List the caller's conversations
pub async fn list_conversations(
    State(handlers): State<ConversationHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ListConversationsQuery { user_id: user.id };

    match handlers.list_handler.handle(query).await {
        Ok(views) => (
            StatusCode::OK,
            Json(ConversationListEnvelope {
                conversations: views.into_iter().map(Into::into).collect(),
            }),
        )
            .into_response(),
        Err(e) => handle_conversation_error(e),
    }
}

/// GET /api/conversations/:id - Get one owned conversation with transcripts
pub async fn get_conversation(
    State(handlers): State<ConversationHandlers>,
    RequireAuth(user): RequireAuth,
    Path(conversation_id): Path<String>,
) -> Response {
    let conversation_id = match conversation_id.parse::<ConversationId>() {
        Ok(id) => id,
        Err(_) => return conversation_not_found(),
    };

    let query = GetConversationQuery {
        user_id: user.id,
        conversation_id,
    };

    match handlers.get_handler.handle(query).await {
        Ok(detail) => {
            let response: ConversationResponse = detail.into();
            (
                StatusCode::OK,
                Json(ConversationEnvelope {
                    conversation: response,
                }),
            )
                .into_response()
        }
        Err(e) => handle_conversation_error(e),
    }
}

/// PATCH /api/conversations/:id/end - Complete an active conversation
pub async fn end_conversation(
    State(handlers): State<ConversationHandlers>,
    RequireAuth(user): RequireAuth,
    Path(conversation_id): Path<String>,
) -> Response {
    let conversation_id = match conversation_id.parse::<ConversationId>() {
        Ok(id) => id,
        Err(_) => return conversation_not_found(),
    };

    let cmd = EndConversationCommand {
        user_id: user.id,
        conversation_id,
    };

    match handlers.end_handler.handle(cmd).await {
        Ok(detail) => {
            let response: ConversationResponse = detail.into();
            (
                StatusCode::OK,
                Json(ConversationEnvelope {
                    conversation: response,
                }),
            )
                .into_response()
        }
        Err(e) => handle_conversation_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn conversation_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found("Conversation not found")),
    )
        .into_response()
}

fn reference_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found(
            "Language or conversation type not found",
        )),
    )
        .into_response()
}

fn handle_conversation_error(error: ConversationError) -> Response {
    match error {
        // A completed conversation is deliberately indistinguishable from
        // a missing one.
        ConversationError::NotFound(_) | ConversationError::AlreadyCompleted(_) => {
            conversation_not_found()
        }
        ConversationError::LanguageNotFound(_) | ConversationError::TypeNotFound(_) => {
            reference_not_found()
        }
        ConversationError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!(
                "Validation failed for {}: {}",
                field, message
            ))),
        )
            .into_response(),
        ConversationError::InvariantViolation(msg) => {
            tracing::error!("progress invariant violation: {}", msg);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response()
        }
        ConversationError::Infrastructure(msg) => {
            tracing::error!("conversation infrastructure error: {}", msg);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ConversationId;

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_conversation_error(ConversationError::NotFound(ConversationId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn already_completed_maps_to_the_same_404() {
        let response =
            handle_conversation_error(ConversationError::AlreadyCompleted(ConversationId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn missing_reference_maps_to_404() {
        let response = handle_conversation_error(ConversationError::LanguageNotFound(
            crate::domain::foundation::LanguageId::new(),
        ));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response =
            handle_conversation_error(ConversationError::infrastructure("connection refused"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invariant_violation_maps_to_500() {
        let response = handle_conversation_error(ConversationError::InvariantViolation(
            "negative counters".to_string(),
        ));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
