//! Application configuration
//!
//! Configuration loaded from .hooks-playground.toml file.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from .hooks-playground.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Count the counter starts from (and resets to)
    #[serde(default)]
    pub initial_count: i64,

    /// Amount added by the step transition
    #[serde(default = "default_step")]
    pub step: i64,

    /// Auxiliary value displayed next to the count
    #[serde(default = "default_new_count")]
    pub new_count: i64,

    /// Local storage key the search term is written under
    #[serde(default = "default_search_key")]
    pub search_key: String,

    /// Search term used when nothing was stored yet
    #[serde(default = "default_search_term")]
    pub default_search_term: String,
}

fn default_step() -> i64 {
    2
}

fn default_new_count() -> i64 {
    500
}

fn default_search_key() -> String {
    "search".to_string()
}

fn default_search_term() -> String {
    "React".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_count: 0,
            step: default_step(),
            new_count: default_new_count(),
            search_key: default_search_key(),
            default_search_term: default_search_term(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        match crate::load_config_file() {
            Some(content) => Self::parse_or_default(&content),
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        }
    }

    /// Parse TOML content, falling back to defaults on error
    pub fn parse_or_default(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.initial_count, 0);
        assert_eq!(config.step, 2);
        assert_eq!(config.new_count, 500);
        assert_eq!(config.search_key, "search");
        assert_eq!(config.default_search_term, "React");
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            initial_count = 2
            search_key = "term"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.initial_count, 2);
        assert_eq!(config.search_key, "term");
        // Other fields should use defaults
        assert_eq!(config.step, 2);
        assert_eq!(config.default_search_term, "React");
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let config = AppConfig::parse_or_default("step = \"two\"");
        assert_eq!(config, AppConfig::default());
    }
}
