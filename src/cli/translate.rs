//! TUI-less "translate" command

use crate::core::backend::{translate, TranslateError, TranslationBackend};
use crate::core::prompt::TranslationRequest;

/// Translate `text` once, with the same rules the interactive translator
/// applies when its timer fires.
pub async fn translate_text(
    backend: &dyn TranslationBackend,
    source_language: &str,
    target_language: &str,
    text: &str,
    model: &str,
) -> Result<String, TranslateError> {
    let request = TranslationRequest::new(source_language, target_language, text);
    if request.is_same_language() {
        return Ok(request.source_text);
    }
    translate(backend, &request, model).await
}

/// Print the translation of `text`. Returns the process exit code.
pub async fn run_translate(
    backend: &dyn TranslationBackend,
    source_language: &str,
    target_language: &str,
    text: &str,
    model: &str,
) -> i32 {
    if text.trim().is_empty() {
        eprintln!("Usage: autotranslate translate [--from CODE] [--to CODE] <TEXT>...");
        return 2;
    }

    match translate_text(backend, source_language, target_language, text, model).await {
        Ok(translated) => {
            println!("{translated}");
            0
        }
        Err(err) => {
            eprintln!("❌ {}", err.user_message());
            1
        }
    }
}
