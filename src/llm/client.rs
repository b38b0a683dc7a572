// Claude API chat-completion client.
//
// Sends a single non-streaming request to the Anthropic Messages API and
// returns the assembled text content. The pipeline holds the only
// latency-bearing step of a request here; there is no retry or timeout
// policy beyond reqwest's defaults.

use anyhow::{anyhow, bail};
use serde_json::Value;
use tracing::debug;

use crate::config::Config;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

// ---------------------------------------------------------------------------
// ClaudeClient
// ---------------------------------------------------------------------------

/// Low-level Claude API client.
pub struct ClaudeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f64,
}

impl ClaudeClient {
    /// Create a new client with the given API key and generation settings.
    pub fn new(api_key: String, model: String, max_tokens: u32, temperature: f64) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: ANTHROPIC_API_URL.to_string(),
            api_key,
            model,
            max_tokens,
            temperature,
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Send one system + user message pair and return the response text.
    pub async fn complete(&self, system: &str, user_content: &str) -> anyhow::Result<String> {
        if self.api_key.is_empty() {
            bail!("API key not configured");
        }

        let body = serde_json::json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
            "system": system,
            "messages": [{ "role": "user", "content": user_content }]
        });

        let response = self
            .http
            .post(&self.base_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let payload: Value = response.json().await?;
        debug!(%status, "chat completion response received");

        if !status.is_success() {
            bail!("API returned status {status}: {}", extract_api_error(&payload));
        }

        extract_completion_text(&payload)
            .ok_or_else(|| anyhow!("response contained no text content"))
    }
}

// ---------------------------------------------------------------------------
// ChatClient wrapper
// ---------------------------------------------------------------------------

/// High-level wrapper that can be either an active Claude client or disabled.
pub enum ChatClient {
    /// Claude API is configured and ready.
    Active(ClaudeClient),
    /// Chat completion is disabled (no API key configured).
    Disabled,
}

impl ChatClient {
    /// Build a `ChatClient` from the application config.
    ///
    /// Returns `Active` if an API key is present in credentials, otherwise
    /// returns `Disabled`.
    pub fn from_config(config: &Config) -> Self {
        match &config.credentials.anthropic_api_key {
            Some(key) if !key.is_empty() => ChatClient::Active(ClaudeClient::new(
                key.clone(),
                config.llm.model.clone(),
                config.llm.max_tokens,
                config.llm.temperature,
            )),
            _ => ChatClient::Disabled,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ChatClient::Active(_))
    }

    /// Complete a message, delegating to the inner `ClaudeClient` or failing
    /// immediately if disabled.
    pub async fn complete(&self, system: &str, user_content: &str) -> anyhow::Result<String> {
        match self {
            ChatClient::Active(client) => client.complete(system, user_content).await,
            ChatClient::Disabled => bail!("chat completion not configured"),
        }
    }
}

// ---------------------------------------------------------------------------
// Response JSON helpers
// ---------------------------------------------------------------------------

/// Concatenate the text blocks of a Messages API response.
///
/// Expected shape: `{ "content": [ { "type": "text", "text": "..." }, ... ] }`
pub(crate) fn extract_completion_text(payload: &Value) -> Option<String> {
    let blocks = payload.get("content")?.as_array()?;
    let mut text = String::new();
    for block in blocks {
        if block.get("type").and_then(Value::as_str) == Some("text") {
            if let Some(t) = block.get("text").and_then(Value::as_str) {
                text.push_str(t);
            }
        }
    }
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Pull a human-readable message out of an API error payload.
///
/// Expected shape: `{ "error": { "type": "...", "message": "..." } }`
pub(crate) fn extract_api_error(payload: &Value) -> String {
    payload
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .unwrap_or("unknown error")
        .to_string()
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
