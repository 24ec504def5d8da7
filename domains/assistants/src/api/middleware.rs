//! Assistants domain state and auth backend integration

use crate::AssistantsRepositories;
use atrium_auth::AuthBackend;
use atrium_llm::LlmService;
use axum::extract::FromRef;
use std::sync::Arc;

/// Application state for the Assistants domain
#[derive(Clone)]
pub struct AssistantsState {
    pub repos: AssistantsRepositories,
    pub auth: AuthBackend,
    pub llm: Arc<dyn LlmService>,
}

impl FromRef<AssistantsState> for AuthBackend {
    fn from_ref(state: &AssistantsState) -> Self {
        state.auth.clone()
    }
}
