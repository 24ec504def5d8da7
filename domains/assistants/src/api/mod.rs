//! API layer for the Assistants domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::AssistantsState;
pub use routes::routes;
