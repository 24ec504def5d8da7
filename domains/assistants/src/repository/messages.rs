//! Chat message repository
//!
//! Appends compute the sequence number inside the INSERT and the store
//! enforces UNIQUE (conversation_id, assistant, sequence), so two racing
//! sends surface a conflict instead of silently losing a message.

use crate::domain::entities::{AssistantKind, ChatMessage, NewChatMessage};
use atrium_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct ChatMessageRepository {
    pool: PgPool,
}

impl ChatMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List one (conversation, assistant) thread, ordered by sequence ASC
    pub async fn list_thread(
        &self,
        conversation_id: Uuid,
        assistant: AssistantKind,
    ) -> Result<Vec<ChatMessage>> {
        let messages = sqlx::query_as::<_, ChatMessage>(
            r#"
            SELECT id, workspace_id, user_id, conversation_id, assistant,
                   role, content, sequence, created_at
            FROM chat_messages
            WHERE conversation_id = $1 AND assistant = $2
            ORDER BY sequence ASC
            "#,
        )
        .bind(conversation_id)
        .bind(assistant)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    /// List every thread of a conversation for one user in one workspace,
    /// ordered by assistant then sequence
    pub async fn list_conversation(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        conversation_id: Uuid,
    ) -> Result<Vec<ChatMessage>> {
        let messages = sqlx::query_as::<_, ChatMessage>(
            r#"
            SELECT id, workspace_id, user_id, conversation_id, assistant,
                   role, content, sequence, created_at
            FROM chat_messages
            WHERE workspace_id = $1 AND user_id = $2 AND conversation_id = $3
            ORDER BY assistant ASC, sequence ASC
            "#,
        )
        .bind(workspace_id)
        .bind(user_id)
        .bind(conversation_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    /// Check whether a (conversation, assistant) thread has any messages
    pub async fn thread_exists(
        &self,
        conversation_id: Uuid,
        assistant: AssistantKind,
    ) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM chat_messages
                WHERE conversation_id = $1 AND assistant = $2
            )
            "#,
        )
        .bind(conversation_id)
        .bind(assistant)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Append a message to its thread at the next sequence number
    pub async fn append(&self, msg: &NewChatMessage) -> Result<ChatMessage> {
        let created = sqlx::query_as::<_, ChatMessage>(
            r#"
            INSERT INTO chat_messages (
                id, workspace_id, user_id, conversation_id, assistant,
                role, content, sequence, created_at
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7,
                (SELECT COALESCE(MAX(sequence), 0) + 1
                 FROM chat_messages
                 WHERE conversation_id = $4 AND assistant = $5),
                $8
            )
            RETURNING id, workspace_id, user_id, conversation_id, assistant,
                      role, content, sequence, created_at
            "#,
        )
        .bind(msg.id)
        .bind(msg.workspace_id)
        .bind(msg.user_id)
        .bind(msg.conversation_id)
        .bind(msg.assistant)
        .bind(msg.role)
        .bind(&msg.content)
        .bind(msg.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Seed the welcome message for an empty thread.
    ///
    /// Idempotent: inserts sequence 1 only when the thread has no messages,
    /// and a concurrent seed loses quietly via ON CONFLICT DO NOTHING.
    pub async fn seed_welcome(&self, msg: &NewChatMessage) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO chat_messages (
                id, workspace_id, user_id, conversation_id, assistant,
                role, content, sequence, created_at
            )
            SELECT $1, $2, $3, $4, $5, $6, $7, 1, $8
            WHERE NOT EXISTS (
                SELECT 1 FROM chat_messages
                WHERE conversation_id = $4 AND assistant = $5
            )
            ON CONFLICT (conversation_id, assistant, sequence) DO NOTHING
            "#,
        )
        .bind(msg.id)
        .bind(msg.workspace_id)
        .bind(msg.user_id)
        .bind(msg.conversation_id)
        .bind(msg.assistant)
        .bind(msg.role)
        .bind(&msg.content)
        .bind(msg.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
