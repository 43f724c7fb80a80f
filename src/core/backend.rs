//! Where translation requests go: a proxy over HTTP, or a forwarder in-process.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::api::{ChatCompletion, ChatRequest, ErrorBody};
use crate::core::constants::CHAT_ROUTE;
use crate::core::prompt::TranslationRequest;
use crate::proxy::Forwarder;
use crate::utils::url::join_endpoint;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslateError {
    /// The proxy answered with an error body.
    #[error("API error: {error}{}", details_suffix(.details))]
    Api {
        status: u16,
        error: String,
        details: Option<String>,
    },

    #[error("{0}")]
    Transport(String),

    #[error("Invalid response format from translation service")]
    InvalidResponse,
}

fn details_suffix(details: &Option<String>) -> String {
    match details.as_deref().map(str::trim) {
        Some(details) if !details.is_empty() => format!(": {details}"),
        _ => String::new(),
    }
}

impl TranslateError {
    /// Inline text shown in place of a translation.
    pub fn user_message(&self) -> String {
        format!("Translation failed: {self}")
    }
}

#[async_trait]
pub trait TranslationBackend: Send + Sync + 'static {
    /// Send one chat payload and return the raw success body.
    async fn complete(&self, request: ChatRequest) -> Result<Value, TranslateError>;
}

/// Issue `request` through `backend` and extract the trimmed translation.
pub async fn translate<B>(
    backend: &B,
    request: &TranslationRequest,
    model: &str,
) -> Result<String, TranslateError>
where
    B: TranslationBackend + ?Sized,
{
    let body = backend.complete(request.to_chat_request(model)).await?;
    extract_translation(body)
}

pub fn extract_translation(body: Value) -> Result<String, TranslateError> {
    let completion: ChatCompletion =
        serde_json::from_value(body).map_err(|_| TranslateError::InvalidResponse)?;
    completion
        .first_content()
        .map(|content| content.trim().to_string())
        .ok_or(TranslateError::InvalidResponse)
}

fn error_from_reply(status: u16, reason: Option<&str>, body: Option<Value>) -> TranslateError {
    let parsed = body.and_then(|value| serde_json::from_value::<ErrorBody>(value).ok());
    match parsed {
        Some(ErrorBody { error, details }) if !error.is_empty() => TranslateError::Api {
            status,
            error,
            details,
        },
        _ => TranslateError::Api {
            status,
            error: reason.unwrap_or("Unknown error").to_string(),
            details: None,
        },
    }
}

/// Talks to a running proxy at `{base_url}/api/chat`.
#[derive(Clone, Debug)]
pub struct ProxyClient {
    client: reqwest::Client,
    chat_url: String,
}

impl ProxyClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            chat_url: join_endpoint(base_url, CHAT_ROUTE),
        }
    }
}

#[async_trait]
impl TranslationBackend for ProxyClient {
    async fn complete(&self, request: ChatRequest) -> Result<Value, TranslateError> {
        let response = self
            .client
            .post(&self.chat_url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|err| TranslateError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<Value>().await.ok();
            return Err(error_from_reply(
                status.as_u16(),
                status.canonical_reason(),
                body,
            ));
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| TranslateError::Transport(err.to_string()))
    }
}

/// Runs the proxy's forwarder inside this process.
#[derive(Clone, Debug)]
pub struct EmbeddedBackend {
    forwarder: Forwarder,
}

impl EmbeddedBackend {
    pub fn new(forwarder: Forwarder) -> Self {
        Self { forwarder }
    }
}

#[async_trait]
impl TranslationBackend for EmbeddedBackend {
    async fn complete(&self, request: ChatRequest) -> Result<Value, TranslateError> {
        let body = serde_json::to_vec(&request)
            .map_err(|err| TranslateError::Transport(err.to_string()))?;
        let reply = self.forwarder.handle(&body).await;
        if reply.status.is_success() {
            Ok(reply.body)
        } else {
            Err(error_from_reply(
                reply.status.as_u16(),
                reply.status.canonical_reason(),
                Some(reply.body),
            ))
        }
    }
}
