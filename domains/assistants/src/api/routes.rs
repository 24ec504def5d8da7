//! Route definitions for Assistants domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{assistants, chat};
use super::middleware::AssistantsState;

/// Create assistant catalog routes
fn catalog_routes() -> Router<AssistantsState> {
    Router::new().route("/v1/assistants", get(assistants::list_assistants))
}

/// Create chat routes
fn chat_routes() -> Router<AssistantsState> {
    Router::new()
        .route("/v1/workspaces/{slug}/chat", get(chat::get_conversation))
        .route(
            "/v1/workspaces/{slug}/chat/messages",
            post(chat::send_message),
        )
}

/// Create all Assistants domain API routes
pub fn routes() -> Router<AssistantsState> {
    Router::new().merge(catalog_routes()).merge(chat_routes())
}
