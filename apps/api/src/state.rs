use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::providers::credentials::CredentialResolver;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup. Handlers only see the trait.
    pub llm: Arc<dyn TextGenerator>,
    pub credentials: CredentialResolver,
    pub config: Config,
}
