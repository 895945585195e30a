use anyhow::{Context, Result};

use crate::providers::Provider;

/// Application configuration loaded from environment variables.
///
/// Nothing is required at startup: provider keys are resolved per request by
/// `CredentialResolver`, and a missing key is reported to the user in-band.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on a single provider call, in seconds.
    pub provider_timeout_secs: u64,
    pub gemini_api_base: String,
    pub groq_api_base: String,
    pub together_api_base: String,
    pub siliconflow_api_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            provider_timeout_secs: 30,
            gemini_api_base: Provider::Gemini.default_base_url().to_string(),
            groq_api_base: Provider::Groq.default_base_url().to_string(),
            together_api_base: Provider::Together.default_base_url().to_string(),
            siliconflow_api_base: Provider::SiliconFlow.default_base_url().to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: optional_env("PORT")
                .map(|v| v.parse::<u16>())
                .transpose()
                .context("PORT must be a valid port number")?
                .unwrap_or(defaults.port),
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            provider_timeout_secs: optional_env("PROVIDER_TIMEOUT_SECS")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("PROVIDER_TIMEOUT_SECS must be a whole number of seconds")?
                .unwrap_or(defaults.provider_timeout_secs),
            gemini_api_base: optional_env("GEMINI_API_BASE").unwrap_or(defaults.gemini_api_base),
            groq_api_base: optional_env("GROQ_API_BASE").unwrap_or(defaults.groq_api_base),
            together_api_base: optional_env("TOGETHER_API_BASE")
                .unwrap_or(defaults.together_api_base),
            siliconflow_api_base: optional_env("SILICONFLOW_API_BASE")
                .unwrap_or(defaults.siliconflow_api_base),
        })
    }

    pub fn base_url(&self, provider: Provider) -> &str {
        match provider {
            Provider::Gemini => &self.gemini_api_base,
            Provider::Groq => &self.groq_api_base,
            Provider::Together => &self.together_api_base,
            Provider::SiliconFlow => &self.siliconflow_api_base,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
