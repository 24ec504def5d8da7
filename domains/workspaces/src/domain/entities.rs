//! Domain entities for the Workspaces domain
//!
//! Each entity includes proper validation, serialization, and business rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use std::collections::HashMap;
use uuid::Uuid;

use atrium_common::{Error, Result};
use validator::ValidateEmail;

/// Maximum workspace name length (varchar(100))
const MAX_NAME_LENGTH: usize = 100;

/// Maximum slug length (varchar(50))
const MAX_SLUG_LENGTH: usize = 50;

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with validation
    pub fn new(id: Uuid, email: String, name: Option<String>) -> Result<Self> {
        // Validate email format (validator crate enforces RFC 5321 including length)
        if !email.validate_email() {
            return Err(Error::Validation("Invalid email format".to_string()));
        }

        // Validate name length if provided
        if let Some(ref name) = name {
            if name.is_empty() || name.len() > MAX_NAME_LENGTH {
                return Err(Error::Validation(
                    "Name must be 1-100 characters".to_string(),
                ));
            }
        }

        let now = Utc::now();
        Ok(User {
            id,
            email,
            name,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Workspace entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Workspace {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub settings: Json<HashMap<String, serde_json::Value>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Workspace {
    /// Create a new workspace with validation
    pub fn new(name: String, slug: Option<String>) -> Result<Self> {
        if name.is_empty() || name.len() > MAX_NAME_LENGTH {
            return Err(Error::Validation(
                "Workspace name must be 1-100 characters".to_string(),
            ));
        }

        let slug = match slug {
            Some(s) => {
                Self::validate_slug(&s)?;
                s
            }
            None => Self::generate_slug(&name)?,
        };

        let now = Utc::now();
        Ok(Workspace {
            id: Uuid::new_v4(),
            name,
            slug,
            settings: Json(HashMap::new()),
            created_at: now,
            updated_at: now,
        })
    }

    /// Validate slug format: lowercase alphanumeric + single hyphens
    pub fn validate_slug(slug: &str) -> Result<()> {
        if slug.is_empty() || slug.len() > MAX_SLUG_LENGTH {
            return Err(Error::Validation(
                "Slug must be 1-50 characters".to_string(),
            ));
        }

        if !slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(Error::Validation(
                "Slug must contain only lowercase letters, numbers, and hyphens".to_string(),
            ));
        }

        if slug.starts_with('-') || slug.ends_with('-') {
            return Err(Error::Validation(
                "Slug cannot start or end with a hyphen".to_string(),
            ));
        }

        if slug.contains("--") {
            return Err(Error::Validation(
                "Slug cannot contain consecutive hyphens".to_string(),
            ));
        }

        Ok(())
    }

    /// Generate slug from name
    fn generate_slug(name: &str) -> Result<String> {
        let raw = name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '-' })
            .collect::<String>();

        // Collapse consecutive hyphens and trim leading/trailing
        let mut base = String::with_capacity(raw.len());
        let mut prev_hyphen = false;
        for ch in raw.chars() {
            if ch == '-' {
                if !prev_hyphen {
                    base.push(ch);
                }
                prev_hyphen = true;
            } else {
                base.push(ch);
                prev_hyphen = false;
            }
        }
        let base = base.trim_matches('-').to_string();

        if base.is_empty() {
            return Err(Error::Validation(
                "Cannot generate valid slug from name".to_string(),
            ));
        }

        let slug = if base.len() > MAX_SLUG_LENGTH {
            base[..MAX_SLUG_LENGTH].trim_end_matches('-').to_string()
        } else {
            base
        };

        Ok(slug)
    }
}

/// Membership role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "membership_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MembershipRole {
    Owner,
    Admin,
    #[default]
    Member,
}

impl From<atrium_auth::AuthRole> for MembershipRole {
    fn from(role: atrium_auth::AuthRole) -> Self {
        match role {
            atrium_auth::AuthRole::Owner => MembershipRole::Owner,
            atrium_auth::AuthRole::Admin => MembershipRole::Admin,
            atrium_auth::AuthRole::Member => MembershipRole::Member,
        }
    }
}

impl std::fmt::Display for MembershipRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MembershipRole::Owner => write!(f, "owner"),
            MembershipRole::Admin => write!(f, "admin"),
            MembershipRole::Member => write!(f, "member"),
        }
    }
}

/// Membership entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Membership {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub user_id: Uuid,
    pub role: MembershipRole,
    pub created_at: DateTime<Utc>,
}

impl Membership {
    /// Create a new membership
    pub fn new(workspace_id: Uuid, user_id: Uuid, role: MembershipRole) -> Self {
        Membership {
            id: Uuid::new_v4(),
            workspace_id,
            user_id,
            role,
            created_at: Utc::now(),
        }
    }
}
