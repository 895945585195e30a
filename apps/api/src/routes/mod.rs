pub mod diagnostics;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::errors::AppError;
use crate::state::AppState;
use crate::transform::handlers as transform;

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Content transformation
        .route(
            "/api/content/transform",
            post(transform::handle_transform).fallback(method_not_allowed),
        )
        // Chat widgets
        .route(
            "/api/query/chat",
            post(chat::handle_chat).fallback(method_not_allowed),
        )
        .route(
            "/api/query/chat-summary",
            post(chat::handle_chat_summary).fallback(method_not_allowed),
        )
        .route(
            "/api/query/chat-personalized",
            post(chat::handle_chat_personalized).fallback(method_not_allowed),
        )
        .route(
            "/api/query/chat-qwen",
            post(chat::handle_chat_qwen).fallback(method_not_allowed),
        )
        // Agent Studio
        .route(
            "/api/agent",
            post(chat::handle_agent).fallback(method_not_allowed),
        )
        // Diagnostics
        .route(
            "/api/query/test-keys",
            get(diagnostics::handle_test_keys),
        )
        .with_state(state)
}
