use crate::converters::UnitSystem;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Public TheMealDB endpoint using the shared test key
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Main browser configuration structure
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BrowserConfig {
    /// Base URL of the recipe API (no trailing slash)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Number of meals in the random inspiration sample
    #[serde(default = "default_random_count")]
    pub random_count: usize,
    /// Unit system ingredient measures are shown in
    #[serde(default)]
    pub unit_system: UnitSystem,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            random_count: default_random_count(),
            unit_system: UnitSystem::default(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_random_count() -> usize {
    12
}

impl BrowserConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALDB__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALDB__UNIT_SYSTEM=imperial
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`BrowserConfig::load`] for the source priority.
pub fn load_config() -> Result<BrowserConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Environment variables with MEALDB_ prefix, e.g. MEALDB__RANDOM_COUNT
        .add_source(
            Environment::with_prefix("MEALDB")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_values() {
        assert_eq!(default_base_url(), "https://www.themealdb.com/api/json/v1/1");
        assert_eq!(default_timeout(), 30);
        assert_eq!(default_random_count(), 12);
    }

    #[test]
    fn test_config_default() {
        let config = BrowserConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.unit_system, UnitSystem::Metric);
        assert_eq!(config.random_count, 12);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: BrowserConfig = Config::builder()
            .add_source(File::from_str(
                "unit_system = \"imperial\"\nrandom_count = 4",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.unit_system, UnitSystem::Imperial);
        assert_eq!(config.random_count, 4);
        assert_eq!(config.timeout, 30);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_unknown_unit_system_is_rejected() {
        let result: Result<BrowserConfig, _> = Config::builder()
            .add_source(File::from_str("unit_system = \"cubits\"", FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize();

        assert!(result.is_err());
    }
}
