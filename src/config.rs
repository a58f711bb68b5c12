//! Configuration management for the `WillItRain` engine
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::WillItRainError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `WillItRain` engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WillItRainConfig {
    /// Forecast service configuration
    pub api: ApiConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Forecast service configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the forecast service
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_api_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_api_base_url() -> String {
    "http://localhost:5080".to_string()
}

fn default_api_timeout() -> u32 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for WillItRainConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: default_api_base_url(),
                timeout_seconds: default_api_timeout(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}

impl WillItRainConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment variable overrides with WILLITRAIN_ prefix
        builder = builder.add_source(
            Environment::with_prefix("WILLITRAIN")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: WillItRainConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("willitrain").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.api.base_url.is_empty() {
            self.api.base_url = default_api_base_url();
        }
        if self.api.timeout_seconds == 0 {
            self.api.timeout_seconds = default_api_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.api.timeout_seconds > 300 {
            return Err(
                WillItRainError::config("API timeout cannot exceed 300 seconds").into(),
            );
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            return Err(WillItRainError::config(
                "Forecast service base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(WillItRainError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(WillItRainError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WillItRainConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:5080");
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = WillItRainConfig::default();
        config.logging.level = "loud".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_base_url() {
        let mut config = WillItRainConfig::default();
        config.api.base_url = "ftp://forecast.example".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("base URL"));
    }

    #[test]
    fn test_config_validation_timeout_range() {
        let mut config = WillItRainConfig::default();
        config.api.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));
    }

    #[test]
    fn test_apply_defaults_fills_empty_fields() {
        let mut config = WillItRainConfig::default();
        config.api.base_url = String::new();
        config.api.timeout_seconds = 0;
        config.apply_defaults();
        assert_eq!(config.api.base_url, "http://localhost:5080");
        assert_eq!(config.api.timeout_seconds, 30);
    }

    #[test]
    fn test_config_path_generation() {
        let path = WillItRainConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("willitrain"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
