//! Authorization context for authenticated users

use crate::types::{AuthIdentity, AuthMembership, AuthRole};
use uuid::Uuid;

/// Represents an authenticated user context
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: AuthIdentity,
    pub memberships: Vec<AuthMembership>,
}

impl AuthContext {
    /// Create new auth context for a user
    pub fn new(user: AuthIdentity, memberships: Vec<AuthMembership>) -> Self {
        Self { user, memberships }
    }

    /// Get membership role for a specific workspace
    pub fn workspace_role(&self, workspace_id: Uuid) -> Option<AuthRole> {
        self.memberships
            .iter()
            .find(|m| m.workspace_id == workspace_id)
            .map(|m| m.role)
    }

    /// Check if user belongs to a workspace
    pub fn is_member(&self, workspace_id: Uuid) -> bool {
        self.workspace_role(workspace_id).is_some()
    }
}
