//! Membership repository

use crate::domain::entities::{Membership, MembershipRole};
use atrium_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct MembershipRepository {
    pool: PgPool,
}

impl MembershipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user's role in a workspace
    pub async fn find_role(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<MembershipRole>> {
        let role = sqlx::query_scalar::<_, MembershipRole>(
            r#"
            SELECT role FROM memberships
            WHERE workspace_id = $1 AND user_id = $2
            "#,
        )
        .bind(workspace_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(role)
    }

    /// Create a new membership
    pub async fn create(&self, membership: &Membership) -> Result<Membership> {
        let created = sqlx::query_as::<_, Membership>(
            r#"
            INSERT INTO memberships (id, workspace_id, user_id, role, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, workspace_id, user_id, role, created_at
            "#,
        )
        .bind(membership.id)
        .bind(membership.workspace_id)
        .bind(membership.user_id)
        .bind(membership.role)
        .bind(membership.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
