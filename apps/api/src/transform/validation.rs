//! Request validation for the transform endpoint. Pure; no I/O.

use serde_json::Value;

use crate::errors::AppError;
use crate::models::transform::{ContentMode, RawTransformRequest, TransformRequest};

pub const DEFAULT_BACKGROUND: &str = "General";

/// Checks, in order: both required fields present and non-blank, then a known mode.
pub fn validate_transform(raw: RawTransformRequest) -> Result<TransformRequest, AppError> {
    let mode = raw
        .mode
        .filter(|m| !matches!(m, Value::Null) && m.as_str() != Some(""));
    let content = raw.original_content.filter(|c| !c.trim().is_empty());

    let (Some(mode), Some(original_content)) = (mode, content) else {
        return Err(AppError::MissingFields(
            "Missing required fields: mode, originalContent".to_string(),
        ));
    };

    let mode = mode
        .as_str()
        .and_then(|m| m.parse::<ContentMode>().ok())
        .ok_or_else(|| {
            AppError::InvalidMode(
                r#"Invalid mode. Must be "summary" or "personalized""#.to_string(),
            )
        })?;

    let professional_background = raw
        .professional_background
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| DEFAULT_BACKGROUND.to_string());

    Ok(TransformRequest {
        mode,
        lesson_path: raw.lesson_path,
        original_content,
        professional_background,
    })
}
