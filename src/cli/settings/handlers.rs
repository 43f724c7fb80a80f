//! Setting handlers for every config key.

use std::net::SocketAddr;

use crate::cli::settings::error::SettingError;
use crate::cli::settings::SettingHandler;
use crate::core::config::data::Config;
use crate::core::constants::{
    DEFAULT_LISTEN_ADDR, DEFAULT_MODEL, DEFAULT_PROXY_URL, DEFAULT_SOURCE_LANGUAGE,
    DEFAULT_TARGET_LANGUAGE,
};
use crate::core::languages::find_language;

/// Data-driven handler for a single optional value.
pub struct ValueHandler {
    key: &'static str,
    hint: &'static str,
    example: &'static str,
    default_display: &'static str,
    get: fn(&Config) -> Option<String>,
    /// Parse and store `Some(input)`, or clear on `None`. Returns the
    /// canonical form that was stored.
    apply: fn(&mut Config, Option<&str>) -> Result<Option<String>, SettingError>,
}

impl SettingHandler for ValueHandler {
    fn key(&self) -> &'static str {
        self.key
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        if args.is_empty() {
            return Err(SettingError::MissingArgs {
                hint: self.hint,
                example: self.example,
            });
        }

        let input = args.join(" ");
        let stored = (self.apply)(config, Some(input.trim()))?.unwrap_or(input);
        Ok(format!("✅ Set {} to: {stored}", self.key))
    }

    fn unset(&self, config: &mut Config) -> String {
        // Clearing never fails.
        let _ = (self.apply)(config, None);
        format!(
            "✅ Unset {} (will use default: {})",
            self.key, self.default_display
        )
    }

    fn format(&self, config: &Config) -> String {
        match (self.get)(config) {
            Some(value) => format!("  {}: {value}", self.key),
            None => format!("  {}: (unset, default: {})", self.key, self.default_display),
        }
    }
}

fn parse_number<T: std::str::FromStr>(
    key: &'static str,
    input: &str,
    expected: &'static str,
) -> Result<T, SettingError> {
    input.parse().map_err(|_| SettingError::InvalidValue {
        key,
        input: input.to_string(),
        expected,
    })
}

fn language_code(input: &str) -> Result<String, SettingError> {
    find_language(input)
        .map(|language| language.code.to_string())
        .ok_or_else(|| SettingError::UnknownLanguage(input.to_string()))
}

pub fn proxy_url_handler() -> ValueHandler {
    ValueHandler {
        key: "proxy-url",
        hint: "To set the proxy URL, specify it:",
        example: "autotranslate set proxy-url http://127.0.0.1:3000",
        default_display: DEFAULT_PROXY_URL,
        get: |c| c.proxy_url.clone(),
        apply: |c, input| {
            c.proxy_url = match input {
                Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                    Some(url.trim_end_matches('/').to_string())
                }
                Some(url) => {
                    return Err(SettingError::InvalidValue {
                        key: "proxy-url",
                        input: url.to_string(),
                        expected: "an http:// or https:// URL",
                    })
                }
                None => None,
            };
            Ok(c.proxy_url.clone())
        },
    }
}

pub fn listen_handler() -> ValueHandler {
    ValueHandler {
        key: "listen",
        hint: "To set the server address, specify host and port:",
        example: "autotranslate set listen 127.0.0.1:3000",
        default_display: DEFAULT_LISTEN_ADDR,
        get: |c| c.listen.clone(),
        apply: |c, input| {
            c.listen = match input {
                Some(addr) => {
                    let parsed: SocketAddr = parse_number("listen", addr, "host:port")?;
                    Some(parsed.to_string())
                }
                None => None,
            };
            Ok(c.listen.clone())
        },
    }
}

pub fn quiet_interval_handler() -> ValueHandler {
    ValueHandler {
        key: "quiet-interval-ms",
        hint: "To set the debounce interval, specify milliseconds:",
        example: "autotranslate set quiet-interval-ms 750",
        default_display: "1000",
        get: |c| c.quiet_interval_ms.map(|ms| ms.to_string()),
        apply: |c, input| {
            c.quiet_interval_ms = input
                .map(|ms| parse_number("quiet-interval-ms", ms, "a whole number of milliseconds"))
                .transpose()?;
            Ok(c.quiet_interval_ms.map(|ms| ms.to_string()))
        },
    }
}

pub fn source_language_handler() -> ValueHandler {
    ValueHandler {
        key: "source-language",
        hint: "To set the default source language, specify a language code:",
        example: "autotranslate set source-language en",
        default_display: DEFAULT_SOURCE_LANGUAGE,
        get: |c| c.source_language.clone(),
        apply: |c, input| {
            c.source_language = input.map(language_code).transpose()?;
            Ok(c.source_language.clone())
        },
    }
}

pub fn target_language_handler() -> ValueHandler {
    ValueHandler {
        key: "target-language",
        hint: "To set the default target language, specify a language code:",
        example: "autotranslate set target-language es",
        default_display: DEFAULT_TARGET_LANGUAGE,
        get: |c| c.target_language.clone(),
        apply: |c, input| {
            c.target_language = input.map(language_code).transpose()?;
            Ok(c.target_language.clone())
        },
    }
}

pub fn model_handler() -> ValueHandler {
    ValueHandler {
        key: "model",
        hint: "To set the model, specify its name:",
        example: "autotranslate set model meta-llama/Llama-3.1-8B-Instruct",
        default_display: DEFAULT_MODEL,
        get: |c| c.payload.model.clone(),
        apply: |c, input| {
            c.payload.model = input.map(str::to_string);
            Ok(c.payload.model.clone())
        },
    }
}

pub fn temperature_handler() -> ValueHandler {
    ValueHandler {
        key: "temperature",
        hint: "To set the default temperature, specify a number:",
        example: "autotranslate set temperature 0.2",
        default_display: "0.2",
        get: |c| c.payload.temperature.map(|t| t.to_string()),
        apply: |c, input| {
            c.payload.temperature = input
                .map(|t| parse_number("temperature", t, "a number"))
                .transpose()?;
            Ok(c.payload.temperature.map(|t| t.to_string()))
        },
    }
}

pub fn top_p_handler() -> ValueHandler {
    ValueHandler {
        key: "top-p",
        hint: "To set the default top_p, specify a number:",
        example: "autotranslate set top-p 0.95",
        default_display: "0.95",
        get: |c| c.payload.top_p.map(|p| p.to_string()),
        apply: |c, input| {
            c.payload.top_p = input
                .map(|p| parse_number("top-p", p, "a number"))
                .transpose()?;
            Ok(c.payload.top_p.map(|p| p.to_string()))
        },
    }
}

pub fn max_tokens_handler() -> ValueHandler {
    ValueHandler {
        key: "max-tokens",
        hint: "To set the default max_tokens, specify a whole number:",
        example: "autotranslate set max-tokens 2048",
        default_display: "2048",
        get: |c| c.payload.max_tokens.map(|n| n.to_string()),
        apply: |c, input| {
            c.payload.max_tokens = input
                .map(|n| parse_number("max-tokens", n, "a whole number"))
                .transpose()?;
            Ok(c.payload.max_tokens.map(|n| n.to_string()))
        },
    }
}
