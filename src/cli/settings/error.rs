//! Error types for settings operations.

use thiserror::Error;

/// Errors that can occur when modifying configuration settings.
#[derive(Debug, Error, PartialEq)]
pub enum SettingError {
    /// The provided setting key is not recognized.
    #[error("Unknown config key: {0}")]
    UnknownKey(String),
    /// The provided language code is not in the language table.
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
    /// The provided value could not be parsed for this key.
    #[error("Invalid value for {key}: {input} (expected {expected})")]
    InvalidValue {
        key: &'static str,
        input: String,
        expected: &'static str,
    },
    /// Required arguments are missing.
    #[error("{hint}")]
    MissingArgs {
        hint: &'static str,
        example: &'static str,
    },
    /// An error occurred while loading or persisting the configuration.
    #[error("Config error: {0}")]
    ConfigError(String),
}

impl SettingError {
    /// Print the error message to stderr with appropriate formatting.
    pub fn print(&self) {
        match self {
            SettingError::UnknownKey(key) => {
                eprintln!("❌ Unknown config key: {key}");
                eprintln!("   Run 'autotranslate set' to list available keys.");
            }
            SettingError::UnknownLanguage(input) => {
                eprintln!("❌ Unknown language: {input}");
                eprintln!("   Run 'autotranslate languages' to list supported codes.");
            }
            SettingError::InvalidValue {
                key,
                input,
                expected,
            } => {
                eprintln!("❌ Invalid value for {key}: {input}");
                eprintln!("   Expected {expected}.");
            }
            SettingError::MissingArgs { hint, example } => {
                eprintln!("⚠️  {hint}");
                eprintln!("Example: {example}");
            }
            SettingError::ConfigError(msg) => {
                eprintln!("❌ Failed to save configuration: {msg}");
            }
        }
    }

    /// Returns the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
