//! Relays `/api/chat` payloads to the upstream chat-completion service.

use hyper::StatusCode;
use serde_json::Value;
use tracing::{debug, error, warn};

use super::defaults::PayloadDefaults;
use super::error::ProxyError;
use super::settings::SettingsSource;
use crate::api::ChatPayload;
use crate::utils::auth::add_bearer_auth;

/// Status and JSON body the proxy answers with.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyReply {
    pub status: StatusCode,
    pub body: Value,
}

impl ProxyReply {
    fn success(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn from_error(err: &ProxyError) -> Self {
        let body = serde_json::to_value(err.to_body()).unwrap_or_else(|_| {
            serde_json::json!({ "error": err.to_string() })
        });
        Self {
            status: err.status(),
            body,
        }
    }
}

/// Stateless request transformer; clone freely.
#[derive(Clone, Debug)]
pub struct Forwarder {
    client: reqwest::Client,
    defaults: PayloadDefaults,
    settings: SettingsSource,
}

impl Forwarder {
    pub fn new(defaults: PayloadDefaults, settings: SettingsSource) -> Self {
        Self {
            client: reqwest::Client::new(),
            defaults,
            settings,
        }
    }

    /// Handle one raw request body. Never fails; errors become replies.
    pub async fn handle(&self, body: &[u8]) -> ProxyReply {
        match self.forward(body).await {
            Ok(value) => ProxyReply::success(value),
            Err(err) => {
                match &err {
                    ProxyError::Configuration { missing } => {
                        error!(?missing, "upstream configuration missing");
                    }
                    ProxyError::Upstream { status, body } => {
                        warn!(status, body = %body, "upstream returned an error");
                    }
                    ProxyError::Transport(detail) => {
                        error!(detail = %detail, "chat request failed");
                    }
                }
                ProxyReply::from_error(&err)
            }
        }
    }

    pub async fn forward(&self, body: &[u8]) -> Result<Value, ProxyError> {
        // Must fail before any network traffic.
        let settings = self.settings.resolve()?;

        debug!(body = %String::from_utf8_lossy(body), "incoming chat request");
        let payload: ChatPayload = serde_json::from_slice(body).map_err(ProxyError::transport)?;

        let upstream = self.defaults.apply(payload);
        let request = self
            .client
            .post(settings.completions_url())
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        let response = add_bearer_auth(request, &settings.api_key)
            .json(&upstream)
            .send()
            .await
            .map_err(ProxyError::transport)?;

        let status = response.status();
        if !status.is_success() {
            debug!(headers = ?response.headers(), "upstream error headers");
            let body = response.text().await.unwrap_or_default();
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let data = response
            .json::<Value>()
            .await
            .map_err(ProxyError::transport)?;
        debug!(response = %data, "upstream response");
        Ok(data)
    }
}
