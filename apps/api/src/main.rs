mod chat;
mod config;
mod errors;
mod llm_client;
mod models;
mod providers;
mod routes;
mod state;
mod transform;

#[cfg(test)]
mod testing;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::providers::credentials::CredentialResolver;
use crate::providers::Provider;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting lesson relay v{}", env!("CARGO_PKG_VERSION"));

    // One HTTP client for the life of the process
    let llm = LlmClient::new(Duration::from_secs(config.provider_timeout_secs))?;
    info!(
        "LLM client initialized (timeout: {}s)",
        config.provider_timeout_secs
    );

    let credentials = CredentialResolver::from_env();
    for provider in Provider::ALL {
        match credentials.resolve(provider) {
            Some(key) => info!("{} key found in {}", provider.display_name(), key.variable),
            None => info!(
                "{} key not set; its endpoints will return setup instructions",
                provider.display_name()
            ),
        }
    }

    let state = AppState {
        llm: Arc::new(llm),
        credentials,
        config: config.clone(),
    };

    // Browser widgets call cross-origin; preflight is answered by the CORS layer.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
