//! Google `generateContent` wire format.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{api_error, GenerationRequest, LlmError, Role};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
    top_p: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        Some(text)
    }
}

pub(super) async fn generate(
    client: &Client,
    request: &GenerationRequest,
) -> Result<String, LlmError> {
    let url = format!(
        "{}/v1beta/models/{}:generateContent",
        request.base_url.trim_end_matches('/'),
        request.model
    );

    let body = GenerateContentRequest {
        contents: request
            .turns
            .iter()
            .map(|turn| Content {
                role: Some(match turn.role {
                    Role::User => "user",
                    Role::Assistant => "model",
                }),
                parts: vec![Part {
                    text: &turn.content,
                }],
            })
            .collect(),
        system_instruction: request.system.as_deref().map(|system| Content {
            role: None,
            parts: vec![Part { text: system }],
        }),
        generation_config: GenerationConfig {
            temperature: request.params.temperature,
            top_k: request.params.top_k,
            top_p: request.params.top_p,
            max_output_tokens: request.params.max_output_tokens,
        },
    };

    let response = client
        .post(&url)
        .header("x-goog-api-key", &request.api_key)
        .json(&body)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(api_error(request.provider, response).await);
    }

    let raw = response.text().await?;
    let parsed: GenerateContentResponse = serde_json::from_str(&raw)?;
    parsed.text().ok_or(LlmError::EmptyContent)
}
