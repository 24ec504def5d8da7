//! HTTP handlers for the Workspaces domain

pub mod workspaces;
