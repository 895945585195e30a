//! Failure classification and remediation text.
//!
//! Every failure reaches the browser as renderable markdown in the normal
//! content channel, tagged with an `ErrorCode`. Classification prefers the
//! structured HTTP/provider status and only falls back to matching the
//! provider's message text.

use serde::Serialize;

use super::Provider;
use crate::llm_client::LlmError;

/// In-band error code carried in a successful HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ApiKeyNotConfigured,
    GenerationFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidCredential,
    RateLimited,
    GenerationFailed,
}

pub fn classify(err: &LlmError) -> FailureKind {
    match err {
        LlmError::Api {
            status,
            provider_status,
            message,
        } => match (*status, provider_status.as_deref()) {
            (429, _) | (_, Some("RESOURCE_EXHAUSTED")) => FailureKind::RateLimited,
            (401 | 403, _) | (_, Some("UNAUTHENTICATED" | "PERMISSION_DENIED")) => {
                FailureKind::InvalidCredential
            }
            _ => classify_message(message),
        },
        // Local failures carry our own wording, never the provider's.
        LlmError::Http(_)
        | LlmError::Timeout { .. }
        | LlmError::Parse(_)
        | LlmError::EmptyContent => FailureKind::GenerationFailed,
    }
}

/// Last-resort classification on a provider's error message. Rate limiting
/// wins when a message mentions both.
pub fn classify_message(message: &str) -> FailureKind {
    let lower = message.to_lowercase();
    if lower.contains("quota") || lower.contains("rate limit") {
        FailureKind::RateLimited
    } else if lower.contains("api key") || lower.contains("invalid") {
        FailureKind::InvalidCredential
    } else {
        FailureKind::GenerationFailed
    }
}

/// Setup instructions for when no provider in `chain` has a key.
pub fn missing_key_message(feature: &str, chain: &[Provider]) -> String {
    match chain {
        [provider] => {
            let mut text = format!(
                "⚠️ **API Key Not Configured**\n\n\
                 To use {feature}, you need a free {name} API key.\n\n\
                 **Setup:**\n\
                 1. Get your free API key: {url}\n\
                 2. Add to environment variables: `{var}=your_key_here`\n\
                 3. Redeploy",
                name = provider.display_name(),
                url = provider.key_console_url(),
                var = provider.key_vars()[0],
            );
            if let Some(tier) = provider.free_tier() {
                text.push_str(&format!("\n\n**Free tier:** {tier}"));
            }
            text
        }
        _ => {
            let mut text = format!(
                "⚠️ **API Key Not Configured**\n\n\
                 To use {feature}, add ONE of these API keys:"
            );
            for (i, provider) in chain.iter().enumerate() {
                text.push_str(&format!(
                    "\n\n**Option {n}: {name}**\n\
                     - Get a key: {url}\n\
                     - Add to environment: `{var}=your_key_here`\n\
                     - Model: {model}",
                    n = i + 1,
                    name = provider.display_name(),
                    url = provider.key_console_url(),
                    var = provider.key_vars()[0],
                    model = provider.default_model(),
                ));
            }
            text
        }
    }
}

/// Remediation text for a failed provider call. `retry_hint` is appended to
/// the rate-limit advice (e.g. ", or switch back to Original mode").
pub fn failure_message(
    kind: FailureKind,
    err: &LlmError,
    provider: Provider,
    retry_hint: &str,
) -> String {
    match kind {
        FailureKind::InvalidCredential => format!(
            "⚠️ **Invalid API Key**\n\n\
             Please check your API key configuration:\n\
             - Environment variable: `{var}`\n\
             - Get a free key: {url}",
            var = provider.key_vars()[0],
            url = provider.key_console_url(),
        ),
        FailureKind::RateLimited => {
            let mut text = "⚠️ **Rate Limit Reached**\n\n".to_string();
            if let Some(limit) = provider.daily_limit() {
                text.push_str(&format!("Free tier limit: {limit}\n\n"));
            }
            text.push_str(&format!("Please wait a moment and try again{retry_hint}."));
            text
        }
        FailureKind::GenerationFailed => format!("⚠️ **Error:** {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16, provider_status: Option<&str>, message: &str) -> LlmError {
        LlmError::Api {
            status,
            provider_status: provider_status.map(str::to_string),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_classify_gemini_invalid_key_message() {
        let err = api_error(
            400,
            Some("INVALID_ARGUMENT"),
            "API key not valid. Please pass a valid API key.",
        );
        assert_eq!(classify(&err), FailureKind::InvalidCredential);
    }

    #[test]
    fn test_classify_gemini_resource_exhausted() {
        let err = api_error(
            429,
            Some("RESOURCE_EXHAUSTED"),
            "Resource has been exhausted (e.g. check quota).",
        );
        assert_eq!(classify(&err), FailureKind::RateLimited);
    }

    #[test]
    fn test_classify_groq_rate_limit_by_status() {
        let err = api_error(
            429,
            None,
            "Rate limit reached for model `llama-3.3-70b-versatile`",
        );
        assert_eq!(classify(&err), FailureKind::RateLimited);
    }

    #[test]
    fn test_classify_unauthorized_status() {
        let err = api_error(401, None, "Unauthorized");
        assert_eq!(classify(&err), FailureKind::InvalidCredential);
    }

    #[test]
    fn test_classify_generic_server_error() {
        let err = api_error(500, Some("INTERNAL"), "An internal error has occurred.");
        assert_eq!(classify(&err), FailureKind::GenerationFailed);
    }

    #[test]
    fn test_classify_message_quota_beats_invalid() {
        assert_eq!(
            classify_message("invalid request: quota exceeded"),
            FailureKind::RateLimited
        );
    }

    #[test]
    fn test_classify_message_literal_examples() {
        assert_eq!(
            classify_message("You exceeded your current quota"),
            FailureKind::RateLimited
        );
        assert_eq!(
            classify_message("Invalid API Key"),
            FailureKind::InvalidCredential
        );
        assert_eq!(
            classify_message("model is overloaded"),
            FailureKind::GenerationFailed
        );
    }

    #[test]
    fn test_classify_malformed_success_body_is_generic() {
        let parse_err = serde_json::from_str::<Vec<u8>>(r#"{"candidates": 5}"#).unwrap_err();
        let err = LlmError::from(parse_err);
        assert!(err.to_string().contains("invalid type"));
        assert_eq!(classify(&err), FailureKind::GenerationFailed);

        let text = failure_message(classify(&err), &err, Provider::Gemini, "");
        assert!(text.starts_with("⚠️ **Error:** JSON parse error"));
        assert!(!text.contains("Invalid API Key"));
    }

    #[test]
    fn test_classify_timeout_is_generic() {
        let err = LlmError::Timeout {
            provider: "Groq",
            secs: 30,
        };
        assert_eq!(classify(&err), FailureKind::GenerationFailed);
    }

    #[test]
    fn test_classify_empty_content_is_generic() {
        assert_eq!(classify(&LlmError::EmptyContent), FailureKind::GenerationFailed);
    }

    #[test]
    fn test_missing_key_message_single_provider() {
        let text = missing_key_message("Summary mode", &[Provider::Gemini]);
        assert!(text.contains("API Key Not Configured"));
        assert!(text.contains("To use Summary mode"));
        assert!(text.contains("`GEMINI_API_KEY=your_key_here`"));
        assert!(text.contains("https://aistudio.google.com/app/apikey"));
        assert!(text.contains("1,500 requests/day"));
    }

    #[test]
    fn test_missing_key_message_chain_lists_every_option() {
        let text = missing_key_message("Qwen chat", &[Provider::Together, Provider::SiliconFlow]);
        assert!(text.contains("ONE of these API keys"));
        assert!(text.contains("**Option 1: Together AI**"));
        assert!(text.contains("**Option 2: SiliconFlow**"));
        assert!(text.contains("`SILICONFLOW_API_KEY=your_key_here`"));
    }

    #[test]
    fn test_failure_messages_are_distinguishable() {
        let err = api_error(500, None, "boom");
        let invalid = failure_message(FailureKind::InvalidCredential, &err, Provider::Gemini, "");
        let limited = failure_message(FailureKind::RateLimited, &err, Provider::Gemini, "");
        let generic = failure_message(FailureKind::GenerationFailed, &err, Provider::Gemini, "");

        assert!(invalid.contains("Invalid API Key"));
        assert!(limited.contains("Rate Limit Reached"));
        assert!(limited.contains("1,500 requests/day"));
        assert!(generic.contains("boom"));
        assert_ne!(limited, generic);
        assert_ne!(invalid, generic);
    }

    #[test]
    fn test_rate_limit_message_appends_hint() {
        let text = failure_message(
            FailureKind::RateLimited,
            &LlmError::EmptyContent,
            Provider::Gemini,
            ", or switch back to Original mode",
        );
        assert!(text.ends_with("try again, or switch back to Original mode."));
    }

    #[test]
    fn test_error_code_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&ErrorCode::ApiKeyNotConfigured).unwrap(),
            "\"API_KEY_NOT_CONFIGURED\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorCode::GenerationFailed).unwrap(),
            "\"GENERATION_FAILED\""
        );
    }
}
