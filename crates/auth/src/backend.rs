//! Concrete authentication backend
//!
//! Wraps `PgPool` + `AuthConfig` and owns auth-specific SQL queries.
//! Uses runtime `sqlx::query_as` (not macros) consistent with the
//! CQRS cross-domain read pattern used by the domain repositories.

use sqlx::PgPool;
use uuid::Uuid;

use crate::claims::SessionClaims;
use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::types::{AuthIdentity, AuthMembership, AuthRole};

/// Row type for membership lookup
#[derive(sqlx::FromRow)]
struct MembershipRow {
    workspace_id: Uuid,
    workspace_name: String,
    workspace_slug: String,
    role: AuthRole,
}

/// Concrete authentication backend.
///
/// Wraps a database pool and auth configuration. Provides methods
/// to look up users and memberships for authentication.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    pool: PgPool,
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(pool: PgPool, config: AuthConfig) -> Self {
        Self { pool, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Find user identity by ID (CQRS read model — lightweight subset of User)
    pub(crate) async fn find_user(&self, id: Uuid) -> Result<Option<AuthIdentity>, AuthError> {
        let user: Option<AuthIdentity> = sqlx::query_as(
            r#"
            SELECT id, email, name, avatar_url, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %id, "Failed to load user");
            AuthError::UserLoadError
        })?;

        Ok(user)
    }

    /// Find memberships for a user (CQRS read model — workspace id + name + slug + role)
    pub(crate) async fn find_memberships(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<AuthMembership>, AuthError> {
        let rows: Vec<MembershipRow> = sqlx::query_as(
            r#"
            SELECT w.id as workspace_id, w.name as workspace_name, w.slug as workspace_slug,
                   m.role
            FROM workspaces w
            INNER JOIN memberships m ON w.id = m.workspace_id
            WHERE m.user_id = $1
            ORDER BY w.name ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %user_id, "Failed to load memberships");
            AuthError::MembershipsLoadError
        })?;

        Ok(rows
            .into_iter()
            .map(|r| AuthMembership {
                workspace_id: r.workspace_id,
                workspace_name: r.workspace_name,
                workspace_slug: r.workspace_slug,
                role: r.role,
            })
            .collect())
    }

    /// Provision a new user from JWT claims (JIT user provisioning).
    ///
    /// Called on first authenticated request when the user doesn't exist in the DB.
    /// Uses `ON CONFLICT DO NOTHING` to handle concurrent first-requests safely.
    async fn provision_user_from_jwt(
        &self,
        user_id: Uuid,
        claims: &SessionClaims,
    ) -> Result<AuthIdentity, AuthError> {
        let email = claims.email.as_deref().ok_or(AuthError::MissingEmail)?;

        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(email)
        .bind(&claims.name)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %user_id, "Failed to provision user");
            AuthError::UserProvisionFailed
        })?;

        tracing::info!(user_id = %user_id, email = %email, "JIT user provisioned");

        self.find_user(user_id).await?.ok_or_else(|| {
            tracing::error!(user_id = %user_id, "User not found after provisioning");
            AuthError::UserProvisionFailed
        })
    }

    /// Shared JWT authentication logic used by the `AuthUser` extractor.
    pub(crate) async fn authenticate_jwt(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = crate::jwt::validate_jwt_token(token, &self.config)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidUserId)?;

        let user = match self.find_user(user_id).await? {
            Some(user) => user,
            None => self.provision_user_from_jwt(user_id, &claims).await?,
        };

        let memberships = self.find_memberships(user_id).await?;

        Ok(AuthContext::new(user, memberships))
    }
}
