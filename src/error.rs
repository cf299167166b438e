//! Error types and handling for `TourSpot`
//!
//! The browsing core itself (catalog, filter, favorites) never fails. Errors
//! only come from the edges: configuration, the settings store and parsing
//! user-provided codes.

use thiserror::Error;

/// Main error type for the `TourSpot` crate
#[derive(Error, Debug)]
pub enum TourspotError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Settings store errors
    #[error("Settings error: {message}")]
    Settings { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Settings file (de)serialization errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl TourspotError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new settings error
    pub fn settings<S: Into<String>>(message: S) -> Self {
        Self::Settings {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TourspotError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TourspotError::Settings { .. } | TourspotError::Json { .. } => {
                "Saved settings could not be read or written. Defaults will be used.".to_string()
            }
            TourspotError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TourspotError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
