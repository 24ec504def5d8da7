//! Chat API handlers
//!
//! The reader lazily seeds a thread with its assistant's welcome message; the
//! appender persists the user message, asks the completion service for a
//! reply, and persists that too. Provider failure is a soft failure: the
//! canned error text is stored as the assistant's reply and returned with
//! `success: false` instead of an HTTP error.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use atrium_auth::{AuthContext, AuthUser};
use atrium_common::{Error, Result, ValidatedJson};

use crate::api::middleware::AssistantsState;
use crate::domain::entities::{
    AssistantKind, ChatMessage, MessageRole, NewChatMessage, PROVIDER_FAILURE_MESSAGE,
};

/// Query params for fetching a conversation
#[derive(Debug, Deserialize)]
pub struct GetConversationQuery {
    /// Omitted on first load; a fresh conversation id is generated
    pub conversation_id: Option<Uuid>,
    #[serde(default)]
    pub assistant: AssistantKind,
}

/// Request for sending a message
#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    pub conversation_id: Uuid,
    #[serde(default)]
    pub assistant: AssistantKind,
    #[validate(length(min = 1, message = "Message cannot be empty"))]
    pub content: String,
}

/// Chat message response DTO
#[derive(Debug, Serialize)]
pub struct ChatMessageResponse {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub sequence: i32,
    pub created_at: DateTime<Utc>,
}

impl From<ChatMessage> for ChatMessageResponse {
    fn from(m: ChatMessage) -> Self {
        Self {
            id: m.id,
            role: m.role,
            content: m.content,
            sequence: m.sequence,
            created_at: m.created_at,
        }
    }
}

/// One message list per assistant kind.
///
/// Every kind is always present so the client never has to special-case a
/// missing thread; adding a kind is a compile error until this struct learns
/// about it.
#[derive(Debug, Default, Serialize)]
pub struct ConversationThreads {
    pub ai_assistant: Vec<ChatMessageResponse>,
    pub sales_assistant: Vec<ChatMessageResponse>,
    pub hr_assistant: Vec<ChatMessageResponse>,
    pub marketing_assistant: Vec<ChatMessageResponse>,
    pub data_analyst: Vec<ChatMessageResponse>,
    pub bug_reporting: Vec<ChatMessageResponse>,
    pub rfp_response: Vec<ChatMessageResponse>,
}

impl ConversationThreads {
    fn push(&mut self, kind: AssistantKind, message: ChatMessageResponse) {
        match kind {
            AssistantKind::AiAssistant => self.ai_assistant.push(message),
            AssistantKind::SalesAssistant => self.sales_assistant.push(message),
            AssistantKind::HrAssistant => self.hr_assistant.push(message),
            AssistantKind::MarketingAssistant => self.marketing_assistant.push(message),
            AssistantKind::DataAnalyst => self.data_analyst.push(message),
            AssistantKind::BugReporting => self.bug_reporting.push(message),
            AssistantKind::RfpResponse => self.rfp_response.push(message),
        }
    }
}

/// Response for the conversation reader
#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub conversation_id: Uuid,
    pub threads: ConversationThreads,
}

/// Response for send message
#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub success: bool,
    pub message: String,
}

/// Resolve a workspace slug against the caller's memberships.
///
/// Non-members get the same 404 as a missing workspace.
fn resolve_workspace(ctx: &AuthContext, slug: &str) -> Result<Uuid> {
    ctx.memberships
        .iter()
        .find(|m| m.workspace_slug == slug)
        .map(|m| m.workspace_id)
        .ok_or_else(|| Error::NotFound("Workspace not found".to_string()))
}

/// Fetch a conversation, creating the requested assistant's thread if needed
pub async fn get_conversation(
    AuthUser(ctx): AuthUser,
    State(state): State<AssistantsState>,
    Path(slug): Path<String>,
    Query(query): Query<GetConversationQuery>,
) -> Result<Json<ConversationResponse>> {
    let workspace_id = resolve_workspace(&ctx, &slug)?;
    let conversation_id = query.conversation_id.unwrap_or_else(Uuid::new_v4);

    // Lazily seed the requested thread; idempotent on repeat reads
    let welcome = NewChatMessage::welcome(workspace_id, ctx.user.id, conversation_id, query.assistant);
    state.repos.messages.seed_welcome(&welcome).await?;

    let messages = state
        .repos
        .messages
        .list_conversation(workspace_id, ctx.user.id, conversation_id)
        .await?;

    let mut threads = ConversationThreads::default();
    for message in messages {
        let kind = message.assistant;
        threads.push(kind, message.into());
    }

    Ok(Json(ConversationResponse {
        conversation_id,
        threads,
    }))
}

/// Send a message to an assistant thread
pub async fn send_message(
    AuthUser(ctx): AuthUser,
    State(state): State<AssistantsState>,
    Path(slug): Path<String>,
    ValidatedJson(req): ValidatedJson<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>> {
    let workspace_id = resolve_workspace(&ctx, &slug)?;

    // Rejects whitespace-only content before anything is persisted
    let user_msg = NewChatMessage::new_user(
        workspace_id,
        ctx.user.id,
        req.conversation_id,
        req.assistant,
        req.content,
    )?;

    // The thread must have been seeded by a prior read
    let exists = state
        .repos
        .messages
        .thread_exists(req.conversation_id, req.assistant)
        .await?;
    if !exists {
        return Err(Error::NotFound("Conversation not found".to_string()));
    }

    state.repos.messages.append(&user_msg).await?;

    // Build the completion request from the full thread history
    let history = state
        .repos
        .messages
        .list_thread(req.conversation_id, req.assistant)
        .await?;

    let llm_messages: Vec<atrium_llm::LlmMessage> = history
        .iter()
        .map(|m| atrium_llm::LlmMessage {
            role: match m.role {
                MessageRole::User => atrium_llm::LlmRole::User,
                MessageRole::Assistant => atrium_llm::LlmRole::Assistant,
            },
            content: m.content.clone(),
        })
        .collect();

    let llm_request = atrium_llm::CompletionRequest {
        model: String::new(),
        system_prompt: Some(req.assistant.system_prompt().to_string()),
        messages: llm_messages,
        max_tokens: None,
        temperature: None,
    };

    let (success, reply) = match state.llm.complete(llm_request).await {
        Ok(response) => (true, response.content),
        Err(e) => {
            tracing::warn!(
                error = %e,
                conversation_id = %req.conversation_id,
                assistant = %req.assistant,
                "Completion provider failed, storing canned reply"
            );
            (false, PROVIDER_FAILURE_MESSAGE.to_string())
        }
    };

    // The reply is persisted either way so reloads match what the caller saw
    let assistant_msg = NewChatMessage::new_assistant(
        workspace_id,
        ctx.user.id,
        req.conversation_id,
        req.assistant,
        reply.clone(),
    )?;
    state.repos.messages.append(&assistant_msg).await?;

    Ok(Json(SendMessageResponse {
        success,
        message: reply,
    }))
}
