//! Wire shapes shared by the translation client and the proxy.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const ROLE_SYSTEM: &str = "system";
pub const ROLE_USER: &str = "user";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ROLE_SYSTEM.to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ROLE_USER.to_string(),
            content: content.into(),
        }
    }
}

/// Request body the client posts to `/api/chat`.
#[derive(Debug, Serialize, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

/// Request body as the proxy receives it.
///
/// Only `messages` is required. Everything else is kept as raw JSON so the
/// defaulting policy can apply the same truthiness rules the browser client
/// relies on, and so non-default values reach upstream untouched.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ChatPayload {
    pub messages: Value,
    #[serde(default)]
    pub model: Option<Value>,
    #[serde(default)]
    pub temperature: Option<Value>,
    #[serde(default)]
    pub top_p: Option<Value>,
    #[serde(default)]
    pub max_tokens: Option<Value>,
    #[serde(default)]
    pub stream: Option<Value>,
    #[serde(default)]
    pub nilrag: Option<Value>,
}

/// Fully defaulted body sent to `{base}/v1/chat/completions`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct UpstreamPayload {
    pub model: Value,
    pub messages: Value,
    pub temperature: Value,
    pub top_p: Value,
    pub max_tokens: Value,
    pub stream: Value,
    pub nilrag: Value,
}

/// Error body returned by the proxy on every failure path.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Deserialize)]
pub struct CompletionMessage {
    pub content: Option<String>,
}

#[derive(Deserialize)]
pub struct CompletionChoice {
    pub message: Option<CompletionMessage>,
}

#[derive(Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

impl ChatCompletion {
    /// Content of the first choice, if the upstream produced one.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_requires_messages_only() {
        let payload: ChatPayload =
            serde_json::from_value(json!({"messages": [{"role": "user", "content": "hi"}]}))
                .expect("payload");
        assert!(payload.model.is_none());
        assert!(payload.nilrag.is_none());

        let missing = serde_json::from_value::<ChatPayload>(json!({"model": "x"}));
        let err = missing.expect_err("messages is required");
        assert!(err.to_string().contains("messages"));
    }

    #[test]
    fn explicit_null_reads_as_absent() {
        let payload: ChatPayload =
            serde_json::from_value(json!({"messages": [], "temperature": null})).expect("payload");
        assert!(payload.temperature.is_none());
    }

    #[test]
    fn client_request_omits_unset_stream() {
        let request = ChatRequest {
            model: "m".into(),
            messages: vec![ChatMessage::user("hola")],
            temperature: 0.2,
            top_p: 0.95,
            max_tokens: 2048,
            stream: None,
        };
        let value = serde_json::to_value(&request).expect("serialize");
        assert!(value.get("stream").is_none());
        assert_eq!(value["messages"][0]["role"], "user");
    }

    #[test]
    fn first_content_tolerates_missing_pieces() {
        let empty: ChatCompletion = serde_json::from_value(json!({})).expect("parse");
        assert_eq!(empty.first_content(), None);

        let no_message: ChatCompletion =
            serde_json::from_value(json!({"choices": [{}]})).expect("parse");
        assert_eq!(no_message.first_content(), None);

        let full: ChatCompletion =
            serde_json::from_value(json!({"choices": [{"message": {"content": " Hola "}}]}))
                .expect("parse");
        assert_eq!(full.first_content(), Some(" Hola "));
    }
}
