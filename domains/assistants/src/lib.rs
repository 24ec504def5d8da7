//! Assistants domain: AI assistant chat threads, messages, catalog

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{
    AssistantKind, ChatMessage, MessageRole, NewChatMessage, PROVIDER_FAILURE_MESSAGE,
};

// Re-export repository types
pub use repository::{AssistantsRepositories, ChatMessageRepository};

// Re-export API types
pub use api::routes;
pub use api::AssistantsState;
