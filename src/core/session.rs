//! User-visible translation state.

use crate::core::constants::{DEFAULT_SOURCE_LANGUAGE, DEFAULT_TARGET_LANGUAGE};

/// What the user sees: both texts, both languages, and whether a request is
/// in flight. Lives only as long as the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationSession {
    pub source_language: String,
    pub target_language: String,
    pub source_text: String,
    pub translated_text: String,
    pub pending: bool,
}

impl Default for TranslationSession {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_LANGUAGE, DEFAULT_TARGET_LANGUAGE)
    }
}

impl TranslationSession {
    pub fn new(source_language: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            source_language: source_language.into(),
            target_language: target_language.into(),
            source_text: String::new(),
            translated_text: String::new(),
            pending: false,
        }
    }

    pub fn has_input(&self) -> bool {
        !self.source_text.trim().is_empty()
    }

    /// Exchange languages, and the texts too when both are filled in.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source_language, &mut self.target_language);
        if !self.source_text.is_empty() && !self.translated_text.is_empty() {
            std::mem::swap(&mut self.source_text, &mut self.translated_text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_exchanges_texts_when_both_present() {
        let mut session = TranslationSession::new("en", "es");
        session.source_text = "Hello".into();
        session.translated_text = "Hola".into();

        session.swap();

        assert_eq!(session.source_language, "es");
        assert_eq!(session.target_language, "en");
        assert_eq!(session.source_text, "Hola");
        assert_eq!(session.translated_text, "Hello");
    }

    #[test]
    fn swap_keeps_texts_when_output_empty() {
        let mut session = TranslationSession::new("en", "de");
        session.source_text = "Hello".into();

        session.swap();

        assert_eq!(session.source_language, "de");
        assert_eq!(session.source_text, "Hello");
        assert!(session.translated_text.is_empty());
    }

    #[test]
    fn whitespace_is_not_input() {
        let mut session = TranslationSession::default();
        session.source_text = " \n\t".into();
        assert!(!session.has_input());
    }
}
