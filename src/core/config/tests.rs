use super::data::{Config, PayloadOverrides};
use super::io::ConfigError;
use crate::core::constants::DEFAULT_MODEL;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_load_nonexistent_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nonexistent_config.toml");

    let config = Config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config, Config::default());
    assert_eq!(config.proxy_url(), "http://127.0.0.1:3000");
    assert_eq!(config.listen(), "127.0.0.1:3000");
    assert_eq!(config.quiet_interval(), Duration::from_millis(1000));
    assert_eq!(config.source_language(), "en");
    assert_eq!(config.target_language(), "es");
}

#[test]
fn test_config_persistence_lifecycle() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let config = Config {
        proxy_url: Some("http://translator.local:8080".to_string()),
        quiet_interval_ms: Some(250),
        target_language: Some("fr".to_string()),
        payload: PayloadOverrides {
            model: Some("small-model".to_string()),
            max_tokens: Some(512),
            ..Default::default()
        },
        ..Default::default()
    };
    config.save_to_path(&config_path).expect("save failed");

    let loaded = Config::load_from_path(&config_path).expect("load failed");
    assert_eq!(loaded, config);

    let mut edited = loaded;
    edited.payload = PayloadOverrides::default();
    edited.target_language = None;
    edited.save_to_path(&config_path).expect("resave failed");

    let contents = fs::read_to_string(&config_path).expect("read failed");
    assert!(!contents.contains("[payload]"));
    let reloaded = Config::load_from_path(&config_path).expect("reload failed");
    assert_eq!(reloaded.target_language(), "es");
    assert_eq!(reloaded.quiet_interval(), Duration::from_millis(250));
}

#[test]
fn payload_overrides_replace_only_what_they_name() {
    let config = Config {
        payload: PayloadOverrides {
            temperature: Some(0.7),
            ..Default::default()
        },
        ..Default::default()
    };

    let defaults = config.payload_defaults();
    assert_eq!(defaults.temperature, 0.7);
    assert_eq!(defaults.model, DEFAULT_MODEL);
    assert_eq!(defaults.top_p, 0.95);
    assert_eq!(defaults.max_tokens, 2048);
    assert_eq!(config.scheduler_options().model, DEFAULT_MODEL);
}

#[test]
fn hand_written_file_is_read() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "listen = \"0.0.0.0:8000\"\nsource_language = \"de\"\n\n[payload]\nmodel = \"m\"\n",
    )
    .expect("write failed");

    let config = Config::load_from_path(&config_path).expect("load failed");
    assert_eq!(config.listen(), "0.0.0.0:8000");
    assert_eq!(config.source_language(), "de");
    assert_eq!(config.scheduler_options().model, "m");
}

#[test]
fn invalid_toml_reports_parse_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "quiet_interval_ms = \"soon\"").expect("write failed");

    let err = Config::load_from_path(&config_path).expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("Failed to parse config at"));
}
