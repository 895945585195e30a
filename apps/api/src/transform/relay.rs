//! Transform relay — resolves the credential, makes the single provider call,
//! and folds every outcome into a `TransformResponse`.
//!
//! Nothing here returns an error: a missing key or a failed call becomes
//! remediation text in `content` with an `ErrorCode`, and the caller renders it
//! like any other reply.

use chrono::Utc;
use tracing::{info, warn};

use crate::config::Config;
use crate::llm_client::{ChatTurn, GenerationRequest, TextGenerator};
use crate::models::transform::{ContentMode, TransformRequest, TransformResponse};
use crate::providers::credentials::CredentialResolver;
use crate::providers::failure::{
    classify, failure_message, missing_key_message, ErrorCode,
};
use crate::providers::Provider;
use crate::transform::prompts::{build_prompt, generation_params};

pub const TRANSFORM_PROVIDER: Provider = Provider::Gemini;

const RETRY_HINT: &str = ", or switch back to Original mode";

pub async fn run_transform(
    request: TransformRequest,
    llm: &dyn TextGenerator,
    credentials: &CredentialResolver,
    config: &Config,
) -> TransformResponse {
    let Some(key) = credentials.resolve(TRANSFORM_PROVIDER) else {
        info!(
            "No {} key configured; returning setup instructions",
            TRANSFORM_PROVIDER.display_name()
        );
        let feature = format!("{} mode", request.mode.label());
        let content = missing_key_message(&feature, &[TRANSFORM_PROVIDER]);
        return respond(request, content, Some(ErrorCode::ApiKeyNotConfigured));
    };

    let generation_request = GenerationRequest {
        provider: key.provider,
        base_url: config.base_url(key.provider).to_string(),
        model: key.provider.default_model().to_string(),
        api_key: key.value,
        system: None,
        turns: vec![ChatTurn::user(build_prompt(&request))],
        params: generation_params(request.mode),
    };

    match llm.generate(&generation_request).await {
        Ok(generation) => {
            info!(
                "Transformed lesson ({:?}, {} chars in, {} chars out) in {}ms",
                request.mode,
                request.original_content.len(),
                generation.text.len(),
                generation.elapsed.as_millis()
            );
            respond(request, generation.text, None)
        }
        Err(err) => {
            let kind = classify(&err);
            warn!("Transform failed ({kind:?}): {err}");
            let content = failure_message(kind, &err, key.provider, RETRY_HINT);
            respond(request, content, Some(ErrorCode::GenerationFailed))
        }
    }
}

fn respond(
    request: TransformRequest,
    content: String,
    error: Option<ErrorCode>,
) -> TransformResponse {
    TransformResponse {
        mode: request.mode,
        content,
        lesson_path: request.lesson_path,
        professional_background: (request.mode == ContentMode::Personalized)
            .then_some(request.professional_background),
        generated_at: Utc::now(),
        cached: error.is_none().then_some(false),
        error,
    }
}
