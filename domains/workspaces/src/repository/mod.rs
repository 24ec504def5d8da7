//! Repository implementations for the Workspaces domain

pub mod memberships;
pub mod users;
pub mod workspaces;

use sqlx::PgPool;

pub use memberships::MembershipRepository;
pub use users::UserRepository;
pub use workspaces::WorkspaceRepository;

/// Combined repository access for the Workspaces domain
#[derive(Clone)]
pub struct WorkspacesRepositories {
    pool: PgPool,
    pub users: UserRepository,
    pub workspaces: WorkspaceRepository,
    pub memberships: MembershipRepository,
}

impl WorkspacesRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            workspaces: WorkspaceRepository::new(pool.clone()),
            memberships: MembershipRepository::new(pool.clone()),
            pool,
        }
    }

    /// Get a reference to the underlying pool (for cross-domain reads)
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
