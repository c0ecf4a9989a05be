//! API environment selection.
//!
//! This module provides the [`ApiEnv`] enum naming the backend the client
//! talks to. The `Mock` environment swaps in a placeholder authentication
//! gateway that never leaves the process.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// The backend environment the client is configured for.
///
/// # Example
///
/// ```rust
/// use heroes_client::ApiEnv;
///
/// let env: ApiEnv = "mock".parse().unwrap();
/// assert!(env.is_mock());
/// assert_eq!(ApiEnv::default(), ApiEnv::Dev);
/// assert_eq!(ApiEnv::Prod.to_string(), "prod");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiEnv {
    /// Local development backend.
    #[default]
    Dev,
    /// Production backend.
    Prod,
    /// No backend for authentication; tokens are fixed placeholders.
    Mock,
}

impl ApiEnv {
    /// Returns `true` for the mock environment.
    #[must_use]
    pub const fn is_mock(&self) -> bool {
        matches!(self, Self::Mock)
    }
}

impl fmt::Display for ApiEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dev => "dev",
            Self::Prod => "prod",
            Self::Mock => "mock",
        };
        f.write_str(name)
    }
}

impl FromStr for ApiEnv {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "dev" | "development" => Ok(Self::Dev),
            "prod" | "production" => Ok(Self::Prod),
            "mock" => Ok(Self::Mock),
            _ => Err(ConfigError::InvalidApiEnv { env: s }),
        }
    }
}
