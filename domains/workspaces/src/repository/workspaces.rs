//! Workspace repository

use crate::domain::entities::{MembershipRole, Workspace};
use atrium_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct WorkspaceRepository {
    pool: PgPool,
}

impl WorkspaceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find workspace by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Workspace>> {
        let ws = sqlx::query_as::<_, Workspace>(
            r#"
            SELECT id, name, slug, settings, created_at, updated_at
            FROM workspaces
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(ws)
    }

    /// Find workspace by slug
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Workspace>> {
        let ws = sqlx::query_as::<_, Workspace>(
            r#"
            SELECT id, name, slug, settings, created_at, updated_at
            FROM workspaces
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(ws)
    }

    /// List workspaces for a user, with the user's role in each
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<(Workspace, MembershipRole)>> {
        #[derive(sqlx::FromRow)]
        struct Row {
            #[sqlx(flatten)]
            workspace: Workspace,
            role: MembershipRole,
        }

        let rows: Vec<Row> = sqlx::query_as(
            r#"
            SELECT w.id, w.name, w.slug, w.settings, w.created_at, w.updated_at,
                   m.role
            FROM workspaces w
            INNER JOIN memberships m ON w.id = m.workspace_id
            WHERE m.user_id = $1
            ORDER BY w.name ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| (r.workspace, r.role)).collect())
    }

    /// Create a new workspace
    pub async fn create(&self, ws: &Workspace) -> Result<Workspace> {
        let created = sqlx::query_as::<_, Workspace>(
            r#"
            INSERT INTO workspaces (id, name, slug, settings, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, slug, settings, created_at, updated_at
            "#,
        )
        .bind(ws.id)
        .bind(&ws.name)
        .bind(&ws.slug)
        .bind(&ws.settings)
        .bind(ws.created_at)
        .bind(ws.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
