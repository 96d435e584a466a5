//! HTTP API gateway for Graft.
//!
//! Exposes the chat endpoint and a health check. Per request: parse the
//! conversation, select the knowledge sections relevant to the latest
//! user message, splice them into the system prompt, make one provider
//! call, and return the normalized reply.
//!
//! Built on Axum. Shared state is immutable after startup — the corpus
//! is loaded once and never written again, so handlers share a plain
//! `Arc` with no locking.

pub mod prompt;

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use graft_config::AppConfig;
use graft_core::error::ProviderError;
use graft_core::message::{Conversation, Message, Role};
use graft_core::provider::{ChatRequest, Provider, Usage};
use graft_providers::AnthropicClient;
use graft_retrieval::Corpus;

/// Shared application state for the gateway.
pub struct AppState {
    pub config: AppConfig,
    pub corpus: Corpus,
    pub provider: Arc<dyn Provider>,
}

pub type SharedState = Arc<AppState>;

/// Build the Axum router with all gateway routes.
pub fn build_router(state: SharedState) -> Router {
    // The chat endpoint is meant to be called from browser clients, so
    // cross-origin POSTs are allowed.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler))
        .with_state(state)
        .layer(DefaultBodyLimit::max(1024 * 1024)) // 1 MB body limit
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Start the gateway HTTP server.
///
/// Fails fast when no API key is configured — a misconfigured server
/// should refuse to start rather than 500 on every request.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let api_key = config.api_key.clone().ok_or(
        "No API key configured — set ANTHROPIC_API_KEY or add api_key to config.toml",
    )?;

    let corpus = Corpus::load(&config.knowledge_file());
    let provider: Arc<dyn Provider> = Arc::new(AnthropicClient::new(api_key));

    let host = config.gateway.host.clone();
    let port = config.gateway.port;
    let addr = format!("{host}:{port}");

    let state = Arc::new(AppState {
        config,
        corpus,
        provider,
    });
    let app = build_router(state);

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ── Request / Response types ──────────────────────────────────────────────

/// A single incoming message. The role is a closed enum: a payload with
/// an unknown role fails parsing with a 400 instead of silently turning
/// into an empty query.
#[derive(Deserialize)]
struct WireMessage {
    role: Role,
    content: String,
}

#[derive(Deserialize)]
struct ChatPayload {
    #[serde(default)]
    messages: Vec<WireMessage>,
}

#[derive(Serialize)]
struct ChatResponse {
    reply: String,
    model: String,
    usage: Option<Usage>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

// ── Handlers ──────────────────────────────────────────────────────────────

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatPayload>, JsonRejection>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(payload) =
        payload.map_err(|e| bad_request(format!("Invalid JSON body: {e}")))?;

    if payload.messages.is_empty() {
        return Err(bad_request("messages array is required".into()));
    }

    let mut conv = Conversation::new();
    for m in payload.messages {
        conv.push(Message::new(m.role, m.content));
    }

    // The latest user message is the retrieval query. No user message at
    // all means an empty query, which selects the entire corpus.
    let query = conv.latest_user_text().to_string();
    let knowledge = state.corpus.select(&query);

    let base = state
        .config
        .system_prompt
        .as_deref()
        .unwrap_or(prompt::DEFAULT_SYSTEM_PROMPT);
    let system = prompt::build_system_prompt(base, &knowledge);

    let mut messages = vec![Message::system(system)];
    messages.extend(conv.messages);

    let request = ChatRequest {
        model: state.config.model.clone(),
        messages,
        temperature: state.config.temperature,
        max_tokens: Some(state.config.max_tokens),
    };

    info!(query_len = query.len(), "chat request");

    match state.provider.complete(request).await {
        Ok(reply) => Ok(Json(ChatResponse {
            reply: reply.reply,
            model: reply.model,
            usage: reply.usage,
        })),
        Err(e) => {
            error!(error = %e, "Provider call failed");
            Err(provider_error_response(e))
        }
    }
}

fn bad_request(message: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
}

/// Map provider failures onto HTTP statuses. Upstream API statuses are
/// passed through when they are themselves errors.
fn provider_error_response(e: ProviderError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &e {
        ProviderError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        ProviderError::AuthenticationFailed(_) => StatusCode::UNAUTHORIZED,
        ProviderError::ApiError { status_code, .. } if *status_code >= 400 => {
            StatusCode::from_u16(*status_code).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        ProviderError::ApiError { .. } => StatusCode::BAD_GATEWAY,
        ProviderError::NotConfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ProviderError::Network(_) => StatusCode::BAD_GATEWAY,
    };
    (status, Json(ErrorResponse { error: e.to_string() }))
}
