//! LLM service abstraction for Atrium
//!
//! Defines the provider-agnostic completion interface plus concrete
//! implementations. The service is constructed once at process start and
//! injected as `Arc<dyn LlmService>` so handlers never touch a global client.

pub mod mock;
pub mod openai;

use serde::{Deserialize, Serialize};

pub use mock::MockLlmService;
pub use openai::OpenAiService;

/// Role of a message in a completion request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmRole {
    User,
    Assistant,
}

/// A single message in the completion history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmMessage {
    pub role: LlmRole,
    pub content: String,
}

/// Provider-agnostic completion request
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Model identifier; empty string selects the service default
    pub model: String,
    /// System prompt prepended to the message list
    pub system_prompt: Option<String>,
    /// Ordered conversation history, oldest first
    pub messages: Vec<LlmMessage>,
    /// Output cap; `None` uses the configured default
    pub max_tokens: Option<u32>,
    /// Sampling temperature; `None` uses the configured default
    pub temperature: Option<f32>,
}

/// Provider-agnostic completion response
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    pub content: String,
    pub model: String,
    pub input_tokens: i32,
    pub output_tokens: i32,
    pub finish_reason: String,
}

/// Errors from completion providers
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Request error: {0}")]
    Request(String),

    #[error("Response error: {0}")]
    Response(String),

    #[error("Rate limit exceeded")]
    RateLimit,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// LLM service configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub default_model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl LlmConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, LlmError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            base_url: std::env::var("OPENAI_BASE_URL").ok(),
            default_model: std::env::var("LLM_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            max_tokens: std::env::var("LLM_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(150),
            temperature: std::env::var("LLM_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.7),
        })
    }
}

/// Completion provider interface
#[async_trait::async_trait]
pub trait LlmService: Send + Sync {
    /// Run a chat completion over the given history
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;

    /// Model used when a request leaves the model empty
    fn default_model(&self) -> &str;
}

/// Factory for constructing the configured LLM service
pub struct LlmServiceFactory;

impl LlmServiceFactory {
    /// Create a service from a provider name and config.
    ///
    /// Recognized providers: `"openai"`, `"mock"`.
    pub fn create(provider: &str, config: LlmConfig) -> Result<Box<dyn LlmService>, LlmError> {
        match provider {
            "openai" => {
                if config.api_key.is_empty() {
                    return Err(LlmError::Configuration(
                        "OpenAI provider requires an API key".to_string(),
                    ));
                }
                Ok(Box::new(OpenAiService::new(config)))
            }
            "mock" => Ok(Box::new(MockLlmService::new())),
            other => Err(LlmError::Configuration(format!(
                "Unknown LLM provider: {}",
                other
            ))),
        }
    }
}
