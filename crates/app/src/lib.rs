//! Atrium application composition root
//!
//! Composes all domain routers into a single application.

use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;

use atrium_assistants::{AssistantsRepositories, AssistantsState};
use atrium_auth::{AuthBackend, AuthConfig};
use atrium_common::Config;
use atrium_llm::{LlmConfig, LlmServiceFactory};
use atrium_workspaces::{WorkspacesRepositories, WorkspacesState};

/// Create the main application router with all routes and middleware
pub async fn create_app(config: Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    // Auth backend shared by every domain
    let auth_config = AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        issuer: config.jwt_issuer.clone(),
        audience: config.jwt_audience.clone(),
    };
    let auth = AuthBackend::new(pool.clone(), auth_config);

    // Completion service, constructed once and injected everywhere
    let llm_config = LlmConfig {
        api_key: config.openai_api_key.clone().unwrap_or_default(),
        base_url: config.openai_base_url.clone(),
        default_model: config.llm_model.clone(),
        max_tokens: config.llm_max_tokens,
        temperature: config.llm_temperature,
    };
    let llm = LlmServiceFactory::create(&config.llm_provider, llm_config)
        .map_err(|e| anyhow::anyhow!("Failed to create LLM service: {}", e))?;

    // Create Workspaces domain state
    let workspaces_state = WorkspacesState {
        repos: WorkspacesRepositories::new(pool.clone()),
        auth: auth.clone(),
    };

    // Create Assistants domain state
    let assistants_state = AssistantsState {
        repos: AssistantsRepositories::new(pool),
        auth,
        llm: Arc::from(llm),
    };

    // Build router — compose domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Atrium API v0.1.0" }))
        .merge(atrium_workspaces::routes().with_state(workspaces_state))
        .merge(atrium_assistants::routes().with_state(assistants_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
