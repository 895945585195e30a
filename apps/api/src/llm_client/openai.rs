//! OpenAI-compatible `/chat/completions` wire format (Groq, Together, SiliconFlow).

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{api_error, GenerationRequest, LlmError, Role};

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

pub(super) async fn generate(
    client: &Client,
    request: &GenerationRequest,
) -> Result<String, LlmError> {
    let url = format!("{}/chat/completions", request.base_url.trim_end_matches('/'));

    let mut messages = Vec::with_capacity(request.turns.len() + 1);
    if let Some(system) = request.system.as_deref() {
        messages.push(Message {
            role: "system",
            content: system,
        });
    }
    messages.extend(request.turns.iter().map(|turn| Message {
        role: match turn.role {
            Role::User => "user",
            Role::Assistant => "assistant",
        },
        content: &turn.content,
    }));

    let body = ChatCompletionRequest {
        model: &request.model,
        messages,
        temperature: request.params.temperature,
        max_tokens: request.params.max_output_tokens,
        top_p: request.params.top_p,
    };

    let response = client
        .post(&url)
        .bearer_auth(&request.api_key)
        .json(&body)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(api_error(request.provider, response).await);
    }

    let raw = response.text().await?;
    let parsed: ChatCompletionResponse = serde_json::from_str(&raw)?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(LlmError::EmptyContent)
}
