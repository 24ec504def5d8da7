//! Workspaces domain: users, workspaces, memberships

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Membership, MembershipRole, User, Workspace};

// Re-export repository types
pub use repository::{
    MembershipRepository, UserRepository, WorkspaceRepository, WorkspacesRepositories,
};

// Re-export API types
pub use api::routes;
pub use api::WorkspacesState;
