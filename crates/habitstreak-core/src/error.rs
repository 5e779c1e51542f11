//! Core error types for habitstreak-core.
//!
//! The streak calculators never fail; errors only arise at the boundaries
//! (configuration files, history snapshots, and validation of caller input).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitstreak-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Missing required configuration key
    #[error("Missing required configuration key: {0}")]
    MissingKey(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A habit or cadence setting is outside its permitted range
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfiguration { field: String, message: String },

    /// A calendar-day key that is not `YYYY-MM-DD`
    #[error("Invalid day key '{value}': expected YYYY-MM-DD")]
    InvalidDayKey { value: String },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_wraps_into_core_error() {
        let err: CoreError = ValidationError::InvalidDayKey {
            value: "2024-13-01".to_string(),
        }
        .into();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation error: Invalid day key '2024-13-01': expected YYYY-MM-DD"
        );
    }

    #[test]
    fn config_error_names_the_file() {
        let err: CoreError = ConfigError::LoadFailed {
            path: PathBuf::from("/tmp/config.toml"),
            message: "stream did not contain valid UTF-8".to_string(),
        }
        .into();
        assert!(matches!(err, CoreError::Config(ConfigError::LoadFailed { .. })));
        assert!(err.to_string().contains("/tmp/config.toml"));
    }
}
