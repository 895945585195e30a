//! LLM Client — the single point of entry for every outbound model call.
//!
//! ARCHITECTURAL RULE: handlers never talk to a provider directly. They build a
//! `GenerationRequest` and hand it to a `TextGenerator`; `LlmClient` is the
//! production implementation and speaks both supported wire formats.
//!
//! One request, one completion: no retries, no streaming. The HTTP client
//! carries an explicit timeout taken from `Config`.
use std::fmt;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::providers::{Provider, WireFormat};

mod gemini;
mod openai;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} did not respond within {secs}s")]
    Timeout { provider: &'static str, secs: u64 },

    #[error("{message}")]
    Api {
        status: u16,
        /// Provider status string when the body carries one (Gemini: `RESOURCE_EXHAUSTED`, ...).
        provider_status: Option<String>,
        message: String,
    },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// No candidate or choice came back at all. Blank text is not an error here.
    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    #[serde(alias = "model")]
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Sampling settings sent with every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    /// Only honoured by Gemini; OpenAI-compatible APIs have no top-k.
    pub top_k: Option<u32>,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

/// Everything needed for a single outbound call.
#[derive(Clone)]
pub struct GenerationRequest {
    pub provider: Provider,
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    pub system: Option<String>,
    pub turns: Vec<ChatTurn>,
    pub params: GenerationParams,
}

impl fmt::Debug for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationRequest")
            .field("provider", &self.provider)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("system", &self.system)
            .field("turns", &self.turns.len())
            .field("params", &self.params)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Generation {
    pub text: String,
    pub model: String,
    pub elapsed: Duration,
}

/// Anything that can turn a `GenerationRequest` into text.
///
/// Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<Generation, LlmError>;
}

/// reqwest-backed generator shared by all handlers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    timeout: Duration,
}

impl LlmClient {
    pub fn new(timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            timeout,
        })
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<Generation, LlmError> {
        let started = Instant::now();

        let result = match request.provider.wire_format() {
            WireFormat::Gemini => gemini::generate(&self.client, request).await,
            WireFormat::OpenAiChat => openai::generate(&self.client, request).await,
        };

        let text = result.map_err(|err| match err {
            LlmError::Http(e) if e.is_timeout() => LlmError::Timeout {
                provider: request.provider.display_name(),
                secs: self.timeout.as_secs(),
            },
            other => other,
        });

        let elapsed = started.elapsed();
        match text {
            Ok(text) => {
                debug!(
                    "{} ({}) responded in {}ms",
                    request.provider.display_name(),
                    request.model,
                    elapsed.as_millis()
                );
                Ok(Generation {
                    text,
                    model: request.model.clone(),
                    elapsed,
                })
            }
            Err(err) => {
                warn!(
                    "{} ({}) failed after {}ms: {}",
                    request.provider.display_name(),
                    request.model,
                    elapsed.as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Turns a non-2xx response into `LlmError::Api`, pulling `error.message`
/// (and Gemini's `error.status`) out of the body when present.
async fn api_error(provider: Provider, response: Response) -> LlmError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => LlmError::Api {
            status,
            provider_status: envelope.error.status,
            message: envelope
                .error
                .message
                .unwrap_or_else(|| format!("{} API request failed", provider.display_name())),
        },
        Err(_) if body.trim().is_empty() => LlmError::Api {
            status,
            provider_status: None,
            message: format!("{} API request failed", provider.display_name()),
        },
        Err(_) => LlmError::Api {
            status,
            provider_status: None,
            message: body,
        },
    }
}
