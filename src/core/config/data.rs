use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{
    DEFAULT_LISTEN_ADDR, DEFAULT_PROXY_URL, DEFAULT_QUIET_INTERVAL, DEFAULT_SOURCE_LANGUAGE,
    DEFAULT_TARGET_LANGUAGE,
};
use crate::core::scheduler::SchedulerOptions;
use crate::proxy::defaults::PayloadDefaults;

/// Overrides for the values the proxy fills into incomplete payloads.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct PayloadOverrides {
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub max_tokens: Option<u32>,
}

impl PayloadOverrides {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the proxy the terminal client talks to
    pub proxy_url: Option<String>,
    /// Address `serve` binds to
    pub listen: Option<String>,
    /// Quiet period before an edit is translated
    pub quiet_interval_ms: Option<u64>,
    pub source_language: Option<String>,
    pub target_language: Option<String>,
    #[serde(default, skip_serializing_if = "PayloadOverrides::is_empty")]
    pub payload: PayloadOverrides,
}

impl Config {
    pub fn proxy_url(&self) -> &str {
        self.proxy_url.as_deref().unwrap_or(DEFAULT_PROXY_URL)
    }

    pub fn listen(&self) -> &str {
        self.listen.as_deref().unwrap_or(DEFAULT_LISTEN_ADDR)
    }

    pub fn quiet_interval(&self) -> Duration {
        self.quiet_interval_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_QUIET_INTERVAL)
    }

    pub fn source_language(&self) -> &str {
        self.source_language
            .as_deref()
            .unwrap_or(DEFAULT_SOURCE_LANGUAGE)
    }

    pub fn target_language(&self) -> &str {
        self.target_language
            .as_deref()
            .unwrap_or(DEFAULT_TARGET_LANGUAGE)
    }

    /// Proxy defaults with any `[payload]` overrides applied.
    pub fn payload_defaults(&self) -> PayloadDefaults {
        let mut defaults = PayloadDefaults::default();
        let overrides = &self.payload;
        if let Some(model) = &overrides.model {
            defaults.model = model.clone();
        }
        if let Some(temperature) = overrides.temperature {
            defaults.temperature = temperature;
        }
        if let Some(top_p) = overrides.top_p {
            defaults.top_p = top_p;
        }
        if let Some(max_tokens) = overrides.max_tokens {
            defaults.max_tokens = max_tokens;
        }
        defaults
    }

    pub fn scheduler_options(&self) -> SchedulerOptions {
        SchedulerOptions {
            quiet_interval: self.quiet_interval(),
            model: self.payload_defaults().model,
        }
    }
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
