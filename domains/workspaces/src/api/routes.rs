//! Route definitions for Workspaces domain API

use axum::{routing::get, Router};

use super::handlers::workspaces;
use super::middleware::WorkspacesState;

/// Create all Workspaces domain API routes
pub fn routes() -> Router<WorkspacesState> {
    Router::new()
        .route("/v1/workspaces", get(workspaces::list_workspaces))
        .route("/v1/workspaces/{slug}", get(workspaces::get_workspace))
}
