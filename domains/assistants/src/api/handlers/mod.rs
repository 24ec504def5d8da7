//! HTTP handlers for the Assistants domain

pub mod assistants;
pub mod chat;
