//! Catalog query handlers for reference data.

mod get_language;
mod list_conversation_types;
mod list_languages;

pub use get_language::{GetLanguageHandler, GetLanguageQuery};
pub use list_conversation_types::ListConversationTypesHandler;
pub use list_languages::ListLanguagesHandler;
