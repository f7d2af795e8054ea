//! Configuration data model.
//!
//! Every field has a default so the application works without a config file,
//! and a partial file only overrides the keys it names.

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and how lookups are sent.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host of the dictionary service, optionally with a path prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Language segment of the entries path (`en` for English).
    #[serde(default = "default_language")]
    pub language: String,
    /// Request timeout; `0` waits indefinitely.
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            language: default_language(),
            timeout_secs: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Render every returned homograph instead of only the first entry.
    #[serde(default)]
    pub show_all_entries: bool,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_all_entries: false,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.dictionaryapi.dev".to_string()
}
fn default_language() -> String {
    "en".to_string()
}
fn default_tick_rate_ms() -> u64 {
    100
}
fn default_log_dir() -> String {
    "~/.local/share/wordlens/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
