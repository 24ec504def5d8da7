//! Workspaces domain state and auth backend integration

use crate::WorkspacesRepositories;
use atrium_auth::AuthBackend;
use axum::extract::FromRef;

/// Application state for the Workspaces domain
#[derive(Clone)]
pub struct WorkspacesState {
    pub repos: WorkspacesRepositories,
    pub auth: AuthBackend,
}

impl FromRef<WorkspacesState> for AuthBackend {
    fn from_ref(state: &WorkspacesState) -> Self {
        state.auth.clone()
    }
}
