//! Settings management for CLI set/unset commands.
//!
//! Every key is a data-driven [`handlers::ValueHandler`]; the
//! [`SettingRegistry`] maps keys to handlers and keeps them in display order.

pub mod error;
pub mod handlers;
pub mod registry;

pub use error::SettingError;
pub use registry::SettingRegistry;

use std::path::Path;

use crate::core::config::data::Config;

/// Trait for handling a configuration setting.
///
/// Handlers edit an in-memory [`Config`]; loading and saving happen around
/// them in [`set_at`] and [`unset_at`].
pub trait SettingHandler: Send + Sync {
    /// Returns the configuration key this handler manages.
    fn key(&self) -> &'static str;

    /// Set the value from the words after the key. Returns the success message.
    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError>;

    /// Clear the value so the default applies again.
    fn unset(&self, config: &mut Config) -> String;

    /// Format the current value for display in `autotranslate set` output.
    fn format(&self, config: &Config) -> String;
}

/// Apply `set <key> <args...>` to the config file at `config_path`.
pub fn set_at(
    registry: &SettingRegistry,
    config_path: &Path,
    key: &str,
    args: &[String],
) -> Result<String, SettingError> {
    let handler = registry
        .get(key)
        .ok_or_else(|| SettingError::UnknownKey(key.to_string()))?;
    edit_at(config_path, |config| handler.set(args, config))
}

/// Apply `unset <key>` to the config file at `config_path`.
pub fn unset_at(
    registry: &SettingRegistry,
    config_path: &Path,
    key: &str,
) -> Result<String, SettingError> {
    let handler = registry
        .get(key)
        .ok_or_else(|| SettingError::UnknownKey(key.to_string()))?;
    edit_at(config_path, |config| Ok(handler.unset(config)))
}

fn edit_at<F>(config_path: &Path, edit: F) -> Result<String, SettingError>
where
    F: FnOnce(&mut Config) -> Result<String, SettingError>,
{
    let mut config = Config::load_from_path(config_path)
        .map_err(|err| SettingError::ConfigError(err.to_string()))?;
    let message = edit(&mut config)?;
    config
        .save_to_path(config_path)
        .map_err(|err| SettingError::ConfigError(err.to_string()))?;
    Ok(message)
}
