//! Workspace API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use atrium_auth::AuthUser;
use atrium_common::{Error, Result};

use crate::api::middleware::WorkspacesState;
use crate::domain::entities::{MembershipRole, Workspace};

/// Workspace response DTO
#[derive(Debug, Serialize)]
pub struct WorkspaceResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub role: Option<MembershipRole>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkspaceResponse {
    fn from_workspace(ws: Workspace, role: Option<MembershipRole>) -> Self {
        Self {
            id: ws.id,
            name: ws.name,
            slug: ws.slug,
            role,
            created_at: ws.created_at,
            updated_at: ws.updated_at,
        }
    }
}

/// List workspaces the authenticated user belongs to
pub async fn list_workspaces(
    AuthUser(ctx): AuthUser,
    State(state): State<WorkspacesState>,
) -> Result<Json<Vec<WorkspaceResponse>>> {
    let workspaces = state.repos.workspaces.list_by_user(ctx.user.id).await?;

    let responses: Vec<WorkspaceResponse> = workspaces
        .into_iter()
        .map(|(ws, role)| WorkspaceResponse::from_workspace(ws, Some(role)))
        .collect();

    Ok(Json(responses))
}

/// Get a single workspace by slug (members only)
pub async fn get_workspace(
    AuthUser(ctx): AuthUser,
    State(state): State<WorkspacesState>,
    Path(slug): Path<String>,
) -> Result<Json<WorkspaceResponse>> {
    let ws = state
        .repos
        .workspaces
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| Error::NotFound("Workspace not found".to_string()))?;

    // Non-members get the same 404 as a missing workspace
    let role = ctx
        .workspace_role(ws.id)
        .ok_or_else(|| Error::NotFound("Workspace not found".to_string()))?;

    Ok(Json(WorkspaceResponse::from_workspace(ws, Some(role.into()))))
}
