//! Configuration types for the heroes client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiConfig`]: The configuration struct holding all client settings
//! - [`ApiConfigBuilder`]: A builder for constructing [`ApiConfig`] instances
//! - [`ClientId`]: A validated OAuth client id
//! - [`ClientSecret`]: A validated OAuth client secret with masked debug output
//! - [`ApiUrl`]: A validated API base URL
//! - [`ApiEnv`]: The backend environment (dev, prod or mock)
//!
//! # Example
//!
//! ```rust
//! use heroes_client::{ApiConfig, ApiUrl, ClientId, ClientSecret};
//!
//! let config = ApiConfig::builder()
//!     .api_url(ApiUrl::new("http://localhost:3000/api").unwrap())
//!     .client_id(ClientId::new("heroes-web").unwrap())
//!     .client_secret(ClientSecret::new("secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.token_url(), "http://localhost:3000/api/oauth/token");
//! ```

mod env;
mod newtypes;

pub use env::ApiEnv;
pub use newtypes::{ApiUrl, ClientId, ClientSecret};

use std::collections::HashMap;

use crate::auth::ClientIdentity;
use crate::error::ConfigError;

/// Service name resolving the token endpoint.
pub const OAUTH_SERVICE_URL: &str = "OAUTH_SERVICE_URL";

/// Service name resolving the heroes collection endpoint.
pub const HEROES_SERVICE_URL: &str = "HEROES_SERVICE_URL";

/// Session lifetime used when the token endpoint omits `expires_in`.
pub const DEFAULT_TIME_EXPIRED: i64 = 3600;

/// Configuration for the heroes client.
///
/// # Thread Safety
///
/// `ApiConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Service URLs
///
/// Each backend service is resolved by name. A name registered with
/// [`ApiConfigBuilder::service_url`] wins; otherwise the default path is
/// joined onto the API base URL.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    api_url: ApiUrl,
    credentials: ClientIdentity,
    time_expired: i64,
    api_env: ApiEnv,
    service_urls: HashMap<String, String>,
    default_language: String,
    user_agent_prefix: Option<String>,
}

impl ApiConfig {
    /// Creates a new builder for constructing an `ApiConfig`.
    #[must_use]
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the OAuth client identity used against the token endpoint.
    #[must_use]
    pub const fn credentials(&self) -> &ClientIdentity {
        &self.credentials
    }

    /// Returns the fallback session lifetime in seconds.
    #[must_use]
    pub const fn time_expired(&self) -> i64 {
        self.time_expired
    }

    /// Returns the backend environment.
    #[must_use]
    pub const fn api_env(&self) -> ApiEnv {
        self.api_env
    }

    /// Returns the language used for translated messages.
    #[must_use]
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Resolves the URL of a named service.
    ///
    /// # Example
    ///
    /// ```rust
    /// use heroes_client::{ApiConfig, ApiUrl, ClientId, ClientSecret};
    ///
    /// let config = ApiConfig::builder()
    ///     .api_url(ApiUrl::new("http://localhost:3000/api").unwrap())
    ///     .client_id(ClientId::new("id").unwrap())
    ///     .client_secret(ClientSecret::new("secret").unwrap())
    ///     .service_url("HEROES_SERVICE_URL", "http://cdn.example.com/heroes")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     config.service_url("HEROES_SERVICE_URL", "heroes"),
    ///     "http://cdn.example.com/heroes"
    /// );
    /// assert_eq!(
    ///     config.service_url("VILLAINS_SERVICE_URL", "villains"),
    ///     "http://localhost:3000/api/villains"
    /// );
    /// ```
    #[must_use]
    pub fn service_url(&self, name: &str, default_path: &str) -> String {
        self.service_urls
            .get(name)
            .cloned()
            .unwrap_or_else(|| self.api_url.join(default_path))
    }

    /// Returns the password-grant token endpoint.
    #[must_use]
    pub fn token_url(&self) -> String {
        self.service_url(OAUTH_SERVICE_URL, "oauth/token")
    }

    /// Returns the heroes collection endpoint.
    #[must_use]
    pub fn heroes_url(&self) -> String {
        self.service_url(HEROES_SERVICE_URL, "heroes")
    }
}

// Verify ApiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiConfig>();
};

/// Builder for constructing [`ApiConfig`] instances.
///
/// Required fields are `api_url`, `client_id` and `client_secret`.
///
/// # Defaults
///
/// - `time_expired`: [`DEFAULT_TIME_EXPIRED`]
/// - `api_env`: [`ApiEnv::Dev`]
/// - `service_urls`: empty
/// - `default_language`: `"en"`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    api_url: Option<ApiUrl>,
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    time_expired: Option<i64>,
    api_env: Option<ApiEnv>,
    service_urls: HashMap<String, String>,
    default_language: Option<String>,
    user_agent_prefix: Option<String>,
}

impl ApiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the OAuth client id (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the OAuth client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Sets the session lifetime used when the token endpoint omits `expires_in`.
    #[must_use]
    pub const fn time_expired(mut self, seconds: i64) -> Self {
        self.time_expired = Some(seconds);
        self
    }

    /// Sets the backend environment.
    #[must_use]
    pub const fn api_env(mut self, env: ApiEnv) -> Self {
        self.api_env = Some(env);
        self
    }

    /// Registers an absolute URL for a named service.
    #[must_use]
    pub fn service_url(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.service_urls.insert(name.into(), url.into());
        self
    }

    /// Sets the language used for translated messages.
    #[must_use]
    pub fn default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = Some(language.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ApiConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if a required field is
    /// not set, or [`ConfigError::InvalidTimeExpired`] if the fallback
    /// lifetime is not positive.
    pub fn build(self) -> Result<ApiConfig, ConfigError> {
        let api_url = self
            .api_url
            .ok_or(ConfigError::MissingRequiredField { field: "api_url" })?;
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self.client_secret.ok_or(ConfigError::MissingRequiredField {
            field: "client_secret",
        })?;

        let time_expired = self.time_expired.unwrap_or(DEFAULT_TIME_EXPIRED);
        if time_expired <= 0 {
            return Err(ConfigError::InvalidTimeExpired {
                seconds: time_expired,
            });
        }

        Ok(ApiConfig {
            api_url,
            credentials: ClientIdentity::new(client_id, client_secret),
            time_expired,
            api_env: self.api_env.unwrap_or_default(),
            service_urls: self.service_urls,
            default_language: self.default_language.unwrap_or_else(|| "en".to_string()),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_builder() -> ApiConfigBuilder {
        ApiConfig::builder()
            .api_url(ApiUrl::new("http://localhost:3000/api").unwrap())
            .client_id(ClientId::new("client").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
    }

    #[test]
    fn test_builder_requires_api_url() {
        let result = ApiConfigBuilder::new()
            .client_id(ClientId::new("client").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_url" })
        ));
    }

    #[test]
    fn test_builder_requires_client_secret() {
        let result = ApiConfigBuilder::new()
            .api_url(ApiUrl::new("http://localhost:3000/api").unwrap())
            .client_id(ClientId::new("client").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "client_secret"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = base_builder().build().unwrap();

        assert_eq!(config.time_expired(), DEFAULT_TIME_EXPIRED);
        assert_eq!(config.api_env(), ApiEnv::Dev);
        assert_eq!(config.default_language(), "en");
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_rejects_non_positive_time_expired() {
        let result = base_builder().time_expired(0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidTimeExpired { seconds: 0 })
        ));
    }

    #[test]
    fn test_default_service_urls_join_api_base() {
        let config = base_builder().build().unwrap();

        assert_eq!(config.token_url(), "http://localhost:3000/api/oauth/token");
        assert_eq!(config.heroes_url(), "http://localhost:3000/api/heroes");
    }

    #[test]
    fn test_service_url_override_wins() {
        let config = base_builder()
            .service_url(OAUTH_SERVICE_URL, "http://auth.example.com/token")
            .build()
            .unwrap();

        assert_eq!(config.token_url(), "http://auth.example.com/token");
        assert_eq!(config.heroes_url(), "http://localhost:3000/api/heroes");
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiConfig>();
    }
}
