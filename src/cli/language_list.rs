use crate::core::languages::LANGUAGES;

pub fn language_lines() -> Vec<String> {
    LANGUAGES
        .iter()
        .map(|language| format!("  {:<4}{}", language.code, language.name))
        .collect()
}

pub fn list_languages() {
    println!("Supported languages:");
    for line in language_lines() {
        println!("{line}");
    }
}
