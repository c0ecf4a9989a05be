//! OAuth 2.0 Resource Owner Password Credentials grant.
//!
//! [`OAuthGateway`] exchanges a username and password for a bearer token at
//! the configured token endpoint and records the result in the session
//! cookies.
//!
//! # Request
//!
//! ```text
//! POST {apiBase}/oauth/token
//! Content-Type: application/x-www-form-urlencoded
//! Authorization: Basic base64(clientId:clientSecret)
//!
//! grant_type=password&username=<u>&password=<p>
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use heroes_client::auth::{AuthGateway, MemoryCookieJar, SessionManager};
//! use heroes_client::auth::oauth::OAuthGateway;
//!
//! let sessions = SessionManager::new(Arc::new(MemoryCookieJar::new()));
//! let gateway = OAuthGateway::new(config, sessions.clone());
//!
//! let token = gateway.login("fakeUserId", "fakePassword").await?;
//! assert_eq!(sessions.token(), token.access_token.unwrap());
//! ```

use async_trait::async_trait;

use crate::auth::oauth::{establish_session, AuthError, AuthGateway};
use crate::auth::{Credentials, SessionManager, TokenResponse};
use crate::clients::{HttpClient, HttpMethod, HttpRequest};
use crate::config::ApiConfig;

/// Gateway performing the password grant against the real token endpoint.
#[derive(Debug)]
pub struct OAuthGateway {
    config: ApiConfig,
    sessions: SessionManager,
    http: HttpClient,
}

// Verify OAuthGateway is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthGateway>();
};

impl OAuthGateway {
    /// Creates a gateway writing into `sessions`.
    #[must_use]
    pub fn new(config: ApiConfig, sessions: SessionManager) -> Self {
        let http = HttpClient::new(&config, None);
        Self {
            config,
            sessions,
            http,
        }
    }

    /// Returns the token endpoint this gateway posts to.
    #[must_use]
    pub fn service_url(&self) -> String {
        self.config.token_url()
    }

    /// Builds the token request for `credentials`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::HttpError`] if the request fails validation.
    pub fn token_request(&self, credentials: &Credentials) -> Result<HttpRequest, AuthError> {
        let request = HttpRequest::builder(HttpMethod::Post, self.service_url())
            .form(credentials.password_grant_form())
            .header(
                "Authorization",
                self.config.credentials().basic_authorization(),
            )
            .attach_bearer(false)
            .build()?;
        Ok(request)
    }
}

#[async_trait]
impl AuthGateway for OAuthGateway {
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, AuthError> {
        let credentials = Credentials::new(username, password);
        let request = self.token_request(&credentials)?;

        tracing::debug!(user = username, url = %request.url, "requesting password grant");
        let response = self.http.send(request).await?;
        let status = response.code;

        if !response.is_ok() {
            tracing::warn!(user = username, status, "token request rejected");
            let message = response
                .body
                .get("raw_body")
                .and_then(serde_json::Value::as_str)
                .map_or_else(|| response.body.to_string(), String::from);
            return Err(AuthError::TokenRequestFailed { status, message });
        }

        let token: TokenResponse =
            serde_json::from_value(response.body).map_err(|e| AuthError::TokenRequestFailed {
                status,
                message: format!("Failed to parse token response: {e}"),
            })?;

        establish_session(&self.sessions, username, token, self.config.time_expired())
    }

    fn logout(&self) {
        self.sessions.clear_cookies();
        tracing::info!("logged out");
    }

    fn sessions(&self) -> &SessionManager {
        &self.sessions
    }
}
