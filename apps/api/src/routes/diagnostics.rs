use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::providers::credentials::mask;
use crate::providers::Provider;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyStatus {
    pub provider: &'static str,
    pub configured: bool,
    /// Variable the key was read from, when configured.
    pub variable: Option<&'static str>,
    pub key_preview: String,
}

#[derive(Debug, Serialize)]
pub struct KeyReport {
    pub providers: Vec<KeyStatus>,
    pub timestamp: DateTime<Utc>,
}

/// GET /api/query/test-keys
/// Reports which provider keys are visible to the process, masked.
pub async fn handle_test_keys(State(state): State<AppState>) -> Json<KeyReport> {
    let providers = Provider::ALL
        .iter()
        .map(|&provider| {
            let key = state.credentials.resolve(provider);
            KeyStatus {
                provider: provider.display_name(),
                configured: key.is_some(),
                variable: key.as_ref().map(|k| k.variable),
                key_preview: mask(key.as_ref().map(|k| k.value.as_str())),
            }
        })
        .collect();

    Json(KeyReport {
        providers,
        timestamp: Utc::now(),
    })
}
