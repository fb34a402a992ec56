//! Core error types for weightlog-core.
//!
//! Derivation and interpolation never fail; errors only surface at the
//! edges of the library (configuration files, caller-supplied input).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for weightlog-core.
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

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::Config(err.into())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_errors_become_parse_failures() {
        let err = toml::from_str::<toml::Value>("height = ").unwrap_err();
        let core: CoreError = err.into();
        assert!(matches!(core, CoreError::Config(ConfigError::ParseFailed(_))));
    }

    #[test]
    fn validation_error_message_names_field() {
        let err = ValidationError::InvalidValue {
            field: "height_unit".into(),
            message: "unknown unit 'parsec'".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for 'height_unit': unknown unit 'parsec'"
        );
    }
}
