//! Registry of setting handlers.

use std::collections::HashMap;

use super::handlers::{
    listen_handler, max_tokens_handler, model_handler, proxy_url_handler, quiet_interval_handler,
    source_language_handler, target_language_handler, temperature_handler, top_p_handler,
};
use super::SettingHandler;
use crate::core::config::data::Config;

/// Registry of all available setting handlers.
pub struct SettingRegistry {
    handlers: HashMap<&'static str, Box<dyn SettingHandler>>,
    /// Keys in display order for `autotranslate set` output.
    display_order: Vec<&'static str>,
}

impl SettingRegistry {
    /// Create a new registry with all handlers registered.
    pub fn new() -> Self {
        let mut registry = Self {
            handlers: HashMap::new(),
            display_order: Vec::new(),
        };

        // Register handlers in display order
        registry.register(Box::new(proxy_url_handler()));
        registry.register(Box::new(listen_handler()));
        registry.register(Box::new(quiet_interval_handler()));
        registry.register(Box::new(source_language_handler()));
        registry.register(Box::new(target_language_handler()));
        registry.register(Box::new(model_handler()));
        registry.register(Box::new(temperature_handler()));
        registry.register(Box::new(top_p_handler()));
        registry.register(Box::new(max_tokens_handler()));

        registry
    }

    fn register(&mut self, handler: Box<dyn SettingHandler>) {
        let key = handler.key();
        self.display_order.push(key);
        self.handlers.insert(key, handler);
    }

    /// Get a handler by key.
    pub fn get(&self, key: &str) -> Option<&dyn SettingHandler> {
        self.handlers.get(key).map(|h| h.as_ref())
    }

    /// Get all keys in display order.
    pub fn keys_display_order(&self) -> &[&'static str] {
        &self.display_order
    }

    /// One line per key, in display order.
    pub fn describe(&self, config: &Config) -> Vec<String> {
        self.display_order
            .iter()
            .filter_map(|key| self.get(key))
            .map(|handler| handler.format(config))
            .collect()
    }

    pub fn print_all(&self, config: &Config) {
        println!("Current configuration:");
        for line in self.describe(config) {
            println!("{line}");
        }
    }
}

impl Default for SettingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
