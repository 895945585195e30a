//! Credential resolution. A missing key is an expected state, not an error.

use std::fmt;
use std::sync::Arc;

use super::Provider;

type Lookup = dyn Fn(&str) -> Option<String> + Send + Sync;

/// A key found for a provider, along with the variable it came from.
#[derive(Clone)]
pub struct ResolvedKey {
    pub provider: Provider,
    pub variable: &'static str,
    pub value: String,
}

impl fmt::Debug for ResolvedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedKey")
            .field("provider", &self.provider)
            .field("variable", &self.variable)
            .field("value", &mask(Some(&self.value)))
            .finish()
    }
}

/// Looks provider keys up by name. Constructed once at startup and consulted
/// per request, so a key added to the environment is picked up without restart.
#[derive(Clone)]
pub struct CredentialResolver {
    lookup: Arc<Lookup>,
}

impl CredentialResolver {
    pub fn from_env() -> Self {
        Self {
            lookup: Arc::new(|name| std::env::var(name).ok()),
        }
    }

    #[cfg(test)]
    pub fn from_pairs<const N: usize>(pairs: [(&str, &str); N]) -> Self {
        let map: std::collections::HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            lookup: Arc::new(move |name| map.get(name).cloned()),
        }
    }

    /// First non-empty variable in the provider's priority order.
    pub fn resolve(&self, provider: Provider) -> Option<ResolvedKey> {
        provider.key_vars().iter().find_map(|&variable| {
            let value = (self.lookup)(variable)?;
            let value = value.trim();
            (!value.is_empty()).then(|| ResolvedKey {
                provider,
                variable,
                value: value.to_string(),
            })
        })
    }

    /// First provider in `chain` that has a key.
    pub fn resolve_first(&self, chain: &[Provider]) -> Option<ResolvedKey> {
        chain.iter().find_map(|&provider| self.resolve(provider))
    }
}

/// Key preview safe for diagnostics output.
pub fn mask(key: Option<&str>) -> String {
    match key {
        Some(key) => format!("{}...", key.chars().take(8).collect::<String>()),
        None => "NOT_SET".to_string(),
    }
}
