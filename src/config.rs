//! Configuration management for `TourSpot`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TourspotError;
use crate::geo::DEFAULT_NEARBY_RADIUS_KM;
use crate::settings::Language;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TourspotConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default application settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
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

/// Default application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Language used when nothing is stored yet
    #[serde(default = "default_language")]
    pub language: String,
    /// Path of the JSON settings file
    #[serde(default = "default_settings_path")]
    pub settings_path: String,
    /// Radius for "nearby spots" on the detail page, in kilometers
    #[serde(default = "default_nearby_radius")]
    pub nearby_radius_km: f64,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_language() -> String {
    Language::default().code().to_string()
}

fn default_settings_path() -> String {
    dirs::config_dir()
        .map(|dir| dir.join("tourspot").join("settings.json"))
        .unwrap_or_else(|| PathBuf::from("settings.json"))
        .to_string_lossy()
        .into_owned()
}

fn default_nearby_radius() -> f64 {
    DEFAULT_NEARBY_RADIUS_KM
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            settings_path: default_settings_path(),
            nearby_radius_km: default_nearby_radius(),
        }
    }
}

impl TourspotConfig {
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

        // Environment overrides, e.g. TOURSPOT_LOGGING__LEVEL=debug
        builder = builder.add_source(
            Environment::with_prefix("TOURSPOT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TourspotConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tourspot").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.defaults.language.is_empty() {
            self.defaults.language = default_language();
        }
        if self.defaults.settings_path.is_empty() {
            self.defaults.settings_path = default_settings_path();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Configured default language
    pub fn language(&self) -> crate::Result<Language> {
        self.defaults
            .language
            .parse::<Language>()
            .map_err(|e| TourspotError::config(e.to_string()))
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        let radius = self.defaults.nearby_radius_km;
        if !(radius > 0.0 && radius <= 500.0) {
            return Err(TourspotError::config(format!(
                "Nearby radius must be within (0, 500] km, got {radius}"
            ))
            .into());
        }
        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TourspotError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TourspotError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        self.language()?;

        Ok(())
    }
}
