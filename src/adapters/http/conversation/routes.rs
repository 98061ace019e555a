//! HTTP routes for conversation endpoints.

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{
    create_conversation, end_conversation, get_conversation, list_conversation_types,
    list_conversations, ConversationHandlers,
};

/// Creates the conversation router with all endpoints.
///
/// `/types` must be registered alongside `/:id`; axum prefers the static
/// segment, matching the original route table.
pub fn conversation_routes(handlers: ConversationHandlers) -> Router {
    Router::new()
        .route("/types", get(list_conversation_types))
        .route("/", post(create_conversation))
        .route("/", get(list_conversations))
        .route("/:id", get(get_conversation))
        .route("/:id/end", patch(end_conversation))
        .with_state(handlers)
}
