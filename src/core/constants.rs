//! Shared constants used across the application

use std::time::Duration;

/// Model requested when neither the caller nor the config names one.
pub const DEFAULT_MODEL: &str = "meta-llama/Llama-3.1-8B-Instruct";

/// Route the proxy serves and the client posts to.
pub const CHAT_ROUTE: &str = "/api/chat";

/// Quiet interval between the last edit and the request firing.
pub const DEFAULT_QUIET_INTERVAL: Duration = Duration::from_millis(1000);

pub const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

pub const DEFAULT_SOURCE_LANGUAGE: &str = "en";
pub const DEFAULT_TARGET_LANGUAGE: &str = "es";

/// Sampling values the client always sends explicitly.
pub const CLIENT_TEMPERATURE: f32 = 0.2;
pub const CLIENT_TOP_P: f32 = 0.95;
pub const CLIENT_MAX_TOKENS: u32 = 2048;
