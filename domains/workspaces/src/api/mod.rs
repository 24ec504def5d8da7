//! API layer for the Workspaces domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::WorkspacesState;
pub use routes::routes;
