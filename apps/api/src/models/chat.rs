use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::llm_client::ChatTurn;
use crate::providers::failure::ErrorCode;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: Option<String>,
    /// Text scraped from the page the reader is on.
    pub page_context: Option<String>,
    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
}

/// Agent Studio request: a persona name plus the same context a chat carries.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRequest {
    pub agent_type: Option<String>,
    pub user_message: Option<String>,
    pub page_context: Option<String>,
    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
}

/// Reply to a chat widget. Failures use the same shape with `error` set and
/// remediation text in `response`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub response: String,
    pub timestamp: DateTime<Utc>,
    pub mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCode>,
}
