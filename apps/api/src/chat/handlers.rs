//! Axum route handlers for the chat widgets and Agent Studio.

use axum::{body::Bytes, extract::State, Json};

use crate::chat::profiles::{ChatProfile, GENERAL, PERSONALIZED, QWEN, SUMMARY};
use crate::chat::relay::{run_chat, validate_agent, validate_chat, ValidChat};
use crate::errors::{parse_json_body, AppError};
use crate::models::chat::{AgentRequest, ChatReply, ChatRequest};
use crate::state::AppState;

async fn relay(profile: &ChatProfile, state: AppState, chat: ValidChat) -> Json<ChatReply> {
    let reply = run_chat(
        profile,
        chat,
        state.llm.as_ref(),
        &state.credentials,
        &state.config,
    )
    .await;
    Json(reply)
}

async fn respond(
    profile: &ChatProfile,
    state: AppState,
    body: Bytes,
) -> Result<Json<ChatReply>, AppError> {
    let request: ChatRequest = parse_json_body(&body)?;
    let chat = validate_chat(profile, request)?;
    Ok(relay(profile, state, chat).await)
}

/// POST /api/query/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatReply>, AppError> {
    respond(&GENERAL, state, body).await
}

/// POST /api/query/chat-summary
pub async fn handle_chat_summary(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatReply>, AppError> {
    respond(&SUMMARY, state, body).await
}

/// POST /api/query/chat-personalized
pub async fn handle_chat_personalized(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatReply>, AppError> {
    respond(&PERSONALIZED, state, body).await
}

/// POST /api/query/chat-qwen
pub async fn handle_chat_qwen(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatReply>, AppError> {
    respond(&QWEN, state, body).await
}

/// POST /api/agent
///
/// The persona comes from `agentType`; everything after that is a chat.
pub async fn handle_agent(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatReply>, AppError> {
    let request: AgentRequest = parse_json_body(&body)?;
    let (profile, chat) = validate_agent(request)?;
    Ok(relay(profile, state, chat).await)
}
