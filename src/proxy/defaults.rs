//! Defaulting policy for payloads forwarded upstream.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::api::{ChatPayload, UpstreamPayload};
use crate::core::constants::DEFAULT_MODEL;

/// Values substituted for fields the caller left out.
///
/// A field counts as left out when it is absent or falsy (`null`, `false`,
/// `0`, `""`). That means an explicit `temperature: 0` is replaced too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadDefaults {
    pub model: String,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
    pub stream: bool,
    pub nilrag: Map<String, Value>,
}

impl Default for PayloadDefaults {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.2,
            top_p: 0.95,
            max_tokens: 2048,
            stream: false,
            nilrag: Map::new(),
        }
    }
}

impl PayloadDefaults {
    pub fn apply(&self, payload: ChatPayload) -> UpstreamPayload {
        let ChatPayload {
            messages,
            model,
            temperature,
            top_p,
            max_tokens,
            stream,
            nilrag,
        } = payload;

        UpstreamPayload {
            model: or_default(model, || json!(self.model)),
            messages,
            temperature: or_default(temperature, || json!(self.temperature)),
            top_p: or_default(top_p, || json!(self.top_p)),
            max_tokens: or_default(max_tokens, || json!(self.max_tokens)),
            stream: or_default(stream, || json!(self.stream)),
            nilrag: or_default(nilrag, || Value::Object(self.nilrag.clone())),
        }
    }
}

fn or_default(value: Option<Value>, fallback: impl FnOnce() -> Value) -> Value {
    match value {
        Some(value) if is_truthy(&value) => value,
        _ => fallback(),
    }
}

/// JSON truthiness as a JavaScript caller would see it.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(value: Value) -> ChatPayload {
        serde_json::from_value(value).expect("payload")
    }

    #[test]
    fn fills_every_missing_field() {
        let upstream = PayloadDefaults::default().apply(payload(json!({"messages": []})));

        assert_eq!(upstream.model, json!(DEFAULT_MODEL));
        assert_eq!(upstream.temperature, json!(0.2));
        assert_eq!(upstream.top_p, json!(0.95));
        assert_eq!(upstream.max_tokens, json!(2048));
        assert_eq!(upstream.stream, json!(false));
        assert_eq!(upstream.nilrag, json!({}));
    }

    #[test]
    fn falsy_values_are_replaced() {
        let upstream = PayloadDefaults::default().apply(payload(json!({
            "messages": [],
            "model": "",
            "temperature": 0,
            "max_tokens": 0,
            "stream": false,
        })));

        assert_eq!(upstream.model, json!(DEFAULT_MODEL));
        assert_eq!(upstream.temperature, json!(0.2));
        assert_eq!(upstream.max_tokens, json!(2048));
        assert_eq!(upstream.stream, json!(false));
    }

    #[test]
    fn caller_values_pass_through_untouched() {
        let messages = json!([{"role": "system", "content": "x"}, {"whatever": 1}]);
        let upstream = PayloadDefaults::default().apply(payload(json!({
            "messages": messages.clone(),
            "model": "custom/model",
            "temperature": 0.7,
            "top_p": 0.5,
            "max_tokens": 16,
            "stream": true,
            "nilrag": {"nodes": []},
        })));

        assert_eq!(upstream.messages, messages);
        assert_eq!(upstream.model, json!("custom/model"));
        assert_eq!(upstream.temperature, json!(0.7));
        assert_eq!(upstream.top_p, json!(0.5));
        assert_eq!(upstream.max_tokens, json!(16));
        assert_eq!(upstream.stream, json!(true));
        assert_eq!(upstream.nilrag, json!({"nodes": []}));
    }

    #[test]
    fn overridden_defaults_are_used() {
        let defaults = PayloadDefaults {
            model: "small".into(),
            max_tokens: 256,
            ..Default::default()
        };
        let upstream = defaults.apply(payload(json!({"messages": []})));
        assert_eq!(upstream.model, json!("small"));
        assert_eq!(upstream.max_tokens, json!(256));
        assert_eq!(upstream.temperature, json!(0.2));
    }

    #[test]
    fn truthiness_matches_javascript() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(false)));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!(-1)));
    }
}
