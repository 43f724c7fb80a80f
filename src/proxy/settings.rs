//! Upstream connection settings, read from the environment on every request.

use std::collections::HashMap;
use std::sync::Arc;

use super::error::ProxyError;
use crate::utils::url::join_endpoint;

pub const UPSTREAM_URL_VAR: &str = "UPSTREAM_API_URL";
pub const UPSTREAM_KEY_VAR: &str = "UPSTREAM_API_KEY";
const COMPLETIONS_ENDPOINT: &str = "v1/chat/completions";

#[derive(Clone, Debug, PartialEq)]
pub struct UpstreamSettings {
    pub base_url: String,
    pub api_key: String,
}

impl UpstreamSettings {
    pub fn completions_url(&self) -> String {
        join_endpoint(&self.base_url, COMPLETIONS_ENDPOINT)
    }
}

type Lookup = dyn Fn(&str) -> Option<String> + Send + Sync;

/// Where upstream settings come from.
///
/// The server uses the process environment. Tests and embedded callers can
/// supply a fixed map instead.
#[derive(Clone)]
pub struct SettingsSource {
    lookup: Arc<Lookup>,
}

impl SettingsSource {
    pub fn environment() -> Self {
        Self {
            lookup: Arc::new(|key| std::env::var(key).ok()),
        }
    }

    pub fn fixed(values: HashMap<String, String>) -> Self {
        Self {
            lookup: Arc::new(move |key| values.get(key).cloned()),
        }
    }

    pub fn resolve(&self) -> Result<UpstreamSettings, ProxyError> {
        let base_url = self.non_empty(UPSTREAM_URL_VAR);
        let api_key = self.non_empty(UPSTREAM_KEY_VAR);

        match (base_url, api_key) {
            (Some(base_url), Some(api_key)) => Ok(UpstreamSettings { base_url, api_key }),
            (base_url, api_key) => {
                let mut missing = Vec::new();
                if base_url.is_none() {
                    missing.push(UPSTREAM_URL_VAR);
                }
                if api_key.is_none() {
                    missing.push(UPSTREAM_KEY_VAR);
                }
                Err(ProxyError::Configuration { missing })
            }
        }
    }

    fn non_empty(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|value| !value.trim().is_empty())
    }
}

impl std::fmt::Debug for SettingsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsSource").finish_non_exhaustive()
    }
}
