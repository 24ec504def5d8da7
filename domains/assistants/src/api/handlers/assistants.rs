//! Assistant catalog API handlers

use axum::Json;
use serde::Serialize;

use atrium_auth::AuthUser;
use atrium_common::Result;

use crate::domain::entities::AssistantKind;

/// Catalog entry for one assistant
#[derive(Debug, Serialize)]
pub struct AssistantResponse {
    pub kind: AssistantKind,
    pub name: &'static str,
    pub description: &'static str,
    pub welcome_message: &'static str,
    pub quick_options: &'static [&'static str],
}

impl From<AssistantKind> for AssistantResponse {
    fn from(kind: AssistantKind) -> Self {
        Self {
            kind,
            name: kind.display_name(),
            description: kind.description(),
            welcome_message: kind.welcome_message(),
            quick_options: kind.quick_options(),
        }
    }
}

/// List the fixed set of assistants available in every workspace
pub async fn list_assistants(AuthUser(_ctx): AuthUser) -> Result<Json<Vec<AssistantResponse>>> {
    let assistants: Vec<AssistantResponse> =
        AssistantKind::ALL.into_iter().map(Into::into).collect();
    Ok(Json(assistants))
}
