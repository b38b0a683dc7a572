// HTTP surface: the chat endpoint, the static chat page, and a health check.
//
// Thin I/O glue over the answer pipeline. Core failures never surface as
// HTTP errors; every request gets a 200 with some answer text.

use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::answer;
use crate::config::Config;
use crate::llm::ChatClient;

/// Shared per-process state. The config and chat client are read-only; all
/// per-request state lives on the stack.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub chat: Arc<ChatClient>,
}

impl AppState {
    pub fn new(config: Config, chat: ChatClient) -> Self {
        Self {
            config: Arc::new(config),
            chat: Arc::new(chat),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub name: String,
    pub version: String,
}

/// POST /chat
pub async fn chat_endpoint(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let answer = answer::generate_response(&state.config, &state.chat, &request.query).await;
    Json(ChatResponse { answer })
}

/// GET / — the embedded chat page.
pub async fn home() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Assemble the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/chat", post(chat_endpoint))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
