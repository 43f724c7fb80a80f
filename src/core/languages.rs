//! Supported languages and code → name resolution.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English" },
    Language { code: "es", name: "Spanish" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "it", name: "Italian" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "ru", name: "Russian" },
    Language { code: "zh", name: "Chinese" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "ko", name: "Korean" },
    Language { code: "ar", name: "Arabic" },
    Language { code: "hi", name: "Hindi" },
];

pub fn find_language(code: &str) -> Option<&'static Language> {
    LANGUAGES
        .iter()
        .find(|language| language.code.eq_ignore_ascii_case(code))
}

/// Human-readable name for `code`, or the code itself when unknown.
pub fn display_name(code: &str) -> &str {
    find_language(code).map_or(code, |language| language.name)
}

/// The language after `code` in the table, wrapping around.
///
/// Unknown codes cycle to the first entry.
pub fn next_code(code: &str) -> &'static str {
    let position = LANGUAGES
        .iter()
        .position(|language| language.code.eq_ignore_ascii_case(code));
    match position {
        Some(index) => LANGUAGES[(index + 1) % LANGUAGES.len()].code,
        None => LANGUAGES[0].code,
    }
}
