//! Repository implementations for the Assistants domain

pub mod messages;

use sqlx::PgPool;

pub use messages::ChatMessageRepository;

/// Combined repository access for the Assistants domain
#[derive(Clone)]
pub struct AssistantsRepositories {
    pool: PgPool,
    pub messages: ChatMessageRepository,
}

impl AssistantsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            messages: ChatMessageRepository::new(pool.clone()),
            pool,
        }
    }

    /// Get a reference to the underlying pool (for cross-domain reads)
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
