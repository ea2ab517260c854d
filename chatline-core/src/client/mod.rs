//! HTTP client for the opaque chat backend.
//!
//! The backend exposes two fixed endpoints under a configurable base URL:
//! `POST /api/chat` and `GET /api/health`. Every failure of the chat call is
//! resolved to a user-facing fallback message here; nothing propagates to the
//! UI loop.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use url::Url;

use crate::config::constants::backend;

pub use crate::config::constants::messages::{
    CONNECTION_ERROR_FALLBACK, PROCESSING_ERROR_FALLBACK,
};

/// Request body for `POST /api/chat`.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// Reply body for `POST /api/chat`. The backend may attach extra fields
/// (timestamps, echoes of the request); they are ignored.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Client for a chat backend instance.
#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ChatClient {
    /// Create a client for the given base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid backend base URL: {base_url}"))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("invalid endpoint path: {path}"))
    }

    /// Send one user message and resolve the text to render as the bot reply.
    ///
    /// A single attempt, no retry, no timeout. All failures are recovered
    /// here:
    /// - reply carries `response` -> that text;
    /// - reply carries `error` (no `response`) -> the processing fallback;
    /// - reply carries neither -> no bot message at all;
    /// - transport failure or non-JSON body -> the connection fallback.
    pub async fn send_message(&self, text: &str) -> Option<String> {
        match self.request_reply(text).await {
            Ok(reply) => {
                if let Some(response) = reply.response {
                    Some(response)
                } else if let Some(error) = reply.error {
                    tracing::warn!(error = %error, "backend reported an error");
                    Some(PROCESSING_ERROR_FALLBACK.to_string())
                } else {
                    tracing::warn!("backend reply carried neither response nor error");
                    None
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "chat request failed");
                Some(CONNECTION_ERROR_FALLBACK.to_string())
            }
        }
    }

    /// Issue the POST and parse the body as JSON regardless of HTTP status.
    ///
    /// There is no status-code contract with the backend beyond "the body
    /// parses as JSON", so `error_for_status` is deliberately not used: an
    /// error status with a JSON `error` body is a backend-reported error, not
    /// a transport failure.
    async fn request_reply(&self, text: &str) -> Result<ChatResponse> {
        let url = self.endpoint(backend::CHAT_PATH)?;
        let response = self
            .http
            .post(url)
            .json(&ChatRequest { message: text })
            .send()
            .await
            .context("chat request did not complete")?;
        response
            .json::<ChatResponse>()
            .await
            .context("chat reply body did not parse as JSON")
    }

    /// Diagnostic health probe: `GET /api/health`, logging the parsed body.
    ///
    /// Failures are for the caller to log, not to surface to the user.
    pub async fn check_health(&self) -> Result<JsonValue> {
        let url = self.endpoint(backend::HEALTH_PATH)?;
        let body = self
            .http
            .get(url)
            .send()
            .await
            .context("health request did not complete")?
            .json::<JsonValue>()
            .await
            .context("health reply body did not parse as JSON")?;
        tracing::info!(health = %body, "backend health check");
        Ok(body)
    }
}
