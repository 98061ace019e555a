//! Conversation HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use handlers::ConversationHandlers;
pub use routes::conversation_routes;
