//! Axum route handler for the Transform API.

use axum::{body::Bytes, extract::State, Json};

use crate::errors::{parse_json_body, AppError};
use crate::models::transform::{RawTransformRequest, TransformResponse};
use crate::state::AppState;
use crate::transform::relay::run_transform;
use crate::transform::validation::validate_transform;

/// POST /api/content/transform
///
/// Returns 200 for every request that passes validation, including missing
/// credentials and provider failures (reported via `error` + `content`).
pub async fn handle_transform(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TransformResponse>, AppError> {
    let raw: RawTransformRequest = parse_json_body(&body)?;
    let request = validate_transform(raw)?;

    let response = run_transform(
        request,
        state.llm.as_ref(),
        &state.credentials,
        &state.config,
    )
    .await;

    Ok(Json(response))
}
