//! Error types for client configuration.
//!
//! This module contains the error type returned when building an
//! [`ApiConfig`](crate::ApiConfig) or one of its validated newtypes.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use heroes_client::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// OAuth client id cannot be empty.
    #[error("Client id cannot be empty. Please provide the OAuth client id registered with the API.")]
    EmptyClientId,

    /// OAuth client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide the OAuth client secret registered with the API.")]
    EmptyClientSecret,

    /// API base URL is invalid.
    #[error("Invalid API URL '{url}'. Please provide a URL with scheme (e.g., 'http://localhost:3000/api').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API environment name is not recognized.
    #[error("Invalid API environment '{env}'. Expected one of: 'dev', 'prod', 'mock'.")]
    InvalidApiEnv {
        /// The environment string that was provided.
        env: String,
    },

    /// Fallback session lifetime must be positive.
    #[error("Invalid session lifetime of {seconds} seconds. It must be greater than zero.")]
    InvalidTimeExpired {
        /// The rejected number of seconds.
        seconds: i64,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
