use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::default::Default;
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading
/// and validating configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Translation provider config
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Path to the cache database file. Empty means the platform default
    /// under the user data directory.
    #[serde(default = "String::new")]
    pub database_path: String,

    /// Platform locale -> provider target code overrides. Merged over the
    /// compiled-in defaults.
    #[serde(default)]
    pub locale_mapping: HashMap<String, String>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    /// API key for the service
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Service endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_endpoint() -> String {
    "https://api-free.deepl.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_json::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.provider.api_key.trim().is_empty() {
            return Err(anyhow!("Translation API key is required"));
        }

        if self.provider.endpoint.trim().is_empty() {
            return Err(anyhow!("Translation provider endpoint is required"));
        }

        if self.provider.timeout_secs == 0 {
            return Err(anyhow!("Provider timeout must be greater than zero"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            provider: ProviderConfig::default(),
            database_path: String::new(),
            locale_mapping: HashMap::new(),
            log_level: LogLevel::default(),
        }
    }
}
