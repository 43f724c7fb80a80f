//! Translation requests and the chat payload built from them.

use crate::api::{ChatMessage, ChatRequest};
use crate::core::constants::{CLIENT_MAX_TOKENS, CLIENT_TEMPERATURE, CLIENT_TOP_P};
use crate::core::languages::display_name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source_language: String,
    pub target_language: String,
    pub source_text: String,
}

impl TranslationRequest {
    pub fn new(
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        source_text: impl Into<String>,
    ) -> Self {
        Self {
            source_language: source_language.into(),
            target_language: target_language.into(),
            source_text: source_text.into(),
        }
    }

    /// Codes compare case-insensitively, as language lookup does.
    pub fn is_same_language(&self) -> bool {
        self.source_language
            .eq_ignore_ascii_case(&self.target_language)
    }

    /// Two-message payload: the fixed instruction, then the raw text.
    pub fn to_chat_request(&self, model: &str) -> ChatRequest {
        let from = display_name(&self.source_language);
        let to = display_name(&self.target_language);
        ChatRequest {
            model: model.to_string(),
            messages: vec![
                ChatMessage::system(system_prompt(from, to)),
                ChatMessage::user(self.source_text.clone()),
            ],
            temperature: CLIENT_TEMPERATURE,
            top_p: CLIENT_TOP_P,
            max_tokens: CLIENT_MAX_TOKENS,
            stream: None,
        }
    }
}

pub fn system_prompt(from: &str, to: &str) -> String {
    format!(
        "You are a translation tool that ONLY translates text. Your ONLY function is to \
translate the exact text provided from {from} to {to}.
IMPORTANT:
- Do NOT explain the translation
- Do NOT answer questions about the content
- Do NOT provide definitions or explanations
- Do NOT add ANY additional text
- ONLY return the direct translation of the input text
- If the text appears to be a question, still ONLY translate it, do not answer it"
    )
}
