//! Domain entities for the Assistants domain
//!
//! Chat history is stored message-per-row: each row belongs to one
//! (conversation, assistant) thread and carries a 1-based sequence number.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atrium_common::{Error, Result};

/// Assistant reply persisted when the completion provider fails
pub const PROVIDER_FAILURE_MESSAGE: &str = "Failed to generate AI response. Please try again.";

/// The closed set of assistants available in every workspace.
///
/// Adding a kind means adding a variant here plus its prompt data in
/// `prompts.rs` — the compiler surfaces every match that needs updating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "assistant_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AssistantKind {
    #[default]
    AiAssistant,
    SalesAssistant,
    HrAssistant,
    MarketingAssistant,
    DataAnalyst,
    BugReporting,
    RfpResponse,
}

impl AssistantKind {
    /// Every assistant kind, in catalog order
    pub const ALL: [AssistantKind; 7] = [
        AssistantKind::AiAssistant,
        AssistantKind::SalesAssistant,
        AssistantKind::HrAssistant,
        AssistantKind::MarketingAssistant,
        AssistantKind::DataAnalyst,
        AssistantKind::BugReporting,
        AssistantKind::RfpResponse,
    ];

    /// Stable wire tag for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            AssistantKind::AiAssistant => "ai_assistant",
            AssistantKind::SalesAssistant => "sales_assistant",
            AssistantKind::HrAssistant => "hr_assistant",
            AssistantKind::MarketingAssistant => "marketing_assistant",
            AssistantKind::DataAnalyst => "data_analyst",
            AssistantKind::BugReporting => "bug_reporting",
            AssistantKind::RfpResponse => "rfp_response",
        }
    }
}

impl std::fmt::Display for AssistantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "message_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// Chat message entity (one stored row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChatMessage {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub user_id: Uuid,
    pub conversation_id: Uuid,
    pub assistant: AssistantKind,
    pub role: MessageRole,
    pub content: String,
    pub sequence: i32,
    pub created_at: DateTime<Utc>,
}

/// A message about to be appended; the store assigns its sequence number
#[derive(Debug, Clone, PartialEq)]
pub struct NewChatMessage {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub user_id: Uuid,
    pub conversation_id: Uuid,
    pub assistant: AssistantKind,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl NewChatMessage {
    /// Create a new user message
    pub fn new_user(
        workspace_id: Uuid,
        user_id: Uuid,
        conversation_id: Uuid,
        assistant: AssistantKind,
        content: String,
    ) -> Result<Self> {
        Self::validate_content(&content)?;

        Ok(NewChatMessage {
            id: Uuid::new_v4(),
            workspace_id,
            user_id,
            conversation_id,
            assistant,
            role: MessageRole::User,
            content,
            created_at: Utc::now(),
        })
    }

    /// Create a new assistant message
    pub fn new_assistant(
        workspace_id: Uuid,
        user_id: Uuid,
        conversation_id: Uuid,
        assistant: AssistantKind,
        content: String,
    ) -> Result<Self> {
        Self::validate_content(&content)?;

        Ok(NewChatMessage {
            id: Uuid::new_v4(),
            workspace_id,
            user_id,
            conversation_id,
            assistant,
            role: MessageRole::Assistant,
            content,
            created_at: Utc::now(),
        })
    }

    /// Create the seed welcome message for a thread
    pub fn welcome(
        workspace_id: Uuid,
        user_id: Uuid,
        conversation_id: Uuid,
        assistant: AssistantKind,
    ) -> Self {
        NewChatMessage {
            id: Uuid::new_v4(),
            workspace_id,
            user_id,
            conversation_id,
            assistant,
            role: MessageRole::Assistant,
            content: assistant.welcome_message().to_string(),
            created_at: Utc::now(),
        }
    }

    /// Validate message content (CHECK (length(trim(content)) > 0))
    fn validate_content(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(Error::Validation(
                "Message content cannot be empty or whitespace-only".to_string(),
            ));
        }
        Ok(())
    }
}
