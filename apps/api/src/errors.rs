use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;

/// Transport-level rejections. These never reach a provider.
///
/// Provider and configuration failures are NOT represented here: they are
/// reported in-band with HTTP 200 (see `providers::failure`).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    MissingFields(String),

    #[error("{0}")]
    InvalidMode(String),

    #[error("{0}")]
    Validation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::MissingFields(_) | AppError::InvalidMode(_) | AppError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        tracing::debug!("Rejecting request ({status}): {self}");

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Reads a request body as JSON whatever its `Content-Type` says; browser
/// widgets post with `text/plain` as often as not.
pub fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("Invalid JSON body: {e}")))
}
