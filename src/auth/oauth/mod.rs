//! OAuth 2.0 password grant login for the heroes API.
//!
//! A user logs in with a username and password; the client exchanges them
//! at the token endpoint for an opaque bearer token, and both the username
//! and the token are stored as cookies with a shared expiry.
//!
//! - [`AuthGateway`]: The login/logout seam used by the rest of the crate
//! - [`OAuthGateway`]: Password grant against the real token endpoint
//! - [`MockAuthGateway`]: Offline gateway for the `mock` environment
//! - [`gateway_for`]: Picks the gateway matching the configured environment
//!
//! # Token Handling
//!
//! Tokens are never decoded or validated locally. A successful response
//! without an access token is reported as [`AuthError::MissingAccessToken`]
//! and leaves the session cookies untouched.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use heroes_client::auth::{MemoryCookieJar, SessionManager};
//! use heroes_client::auth::oauth::{gateway_for, AuthError};
//!
//! let sessions = SessionManager::new(Arc::new(MemoryCookieJar::new()));
//! let gateway = gateway_for(&config, sessions.clone());
//!
//! match gateway.login("fakeUserId", "fakePassword").await {
//!     Ok(_) => assert!(sessions.is_authenticated()),
//!     Err(AuthError::MissingAccessToken { .. }) => println!("no token granted"),
//!     Err(e) => return Err(e.into()),
//! }
//!
//! gateway.logout();
//! assert_eq!(sessions.token(), "");
//! ```

mod error;
mod mock;
mod password_grant;

pub use error::AuthError;
pub use mock::MockAuthGateway;
pub use password_grant::OAuthGateway;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::{SessionManager, TokenResponse};
use crate::config::ApiConfig;

/// Logs users in and out.
///
/// Implementations write the session through [`SessionManager`] so every
/// holder of the same cookie store observes the change.
#[async_trait]
pub trait AuthGateway: Send + Sync + fmt::Debug {
    /// Exchanges `username` and `password` for a token and stores the session.
    ///
    /// Returns the decoded token response. Exactly one token request is
    /// made per call.
    ///
    /// # Errors
    ///
    /// - [`AuthError::TokenRequestFailed`] on a non-2xx or undecodable response
    /// - [`AuthError::MissingAccessToken`] when no token was granted
    /// - [`AuthError::HttpError`] on transport failure
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, AuthError>;

    /// Clears the session cookies. Always succeeds.
    fn logout(&self);

    /// Returns the session this gateway writes to.
    fn sessions(&self) -> &SessionManager;
}

/// Returns the gateway for the configured environment.
///
/// The `mock` environment gets a [`MockAuthGateway`]; every other
/// environment talks to the real token endpoint.
#[must_use]
pub fn gateway_for(config: &ApiConfig, sessions: SessionManager) -> Arc<dyn AuthGateway> {
    if config.api_env().is_mock() {
        tracing::debug!("using mock auth gateway");
        Arc::new(MockAuthGateway::new(config.time_expired(), sessions))
    } else {
        Arc::new(OAuthGateway::new(config.clone(), sessions))
    }
}

/// Stores the session for a decoded token response.
///
/// Uses `expires_in` from the response when positive, `fallback` otherwise.
pub(crate) fn establish_session(
    sessions: &SessionManager,
    username: &str,
    token: TokenResponse,
    fallback: i64,
) -> Result<TokenResponse, AuthError> {
    let Some(access_token) = token.access_token().map(str::to_owned) else {
        tracing::warn!(user = username, "token response has no access token, session not stored");
        return Err(AuthError::MissingAccessToken {
            response: Box::new(token),
        });
    };

    let expires_in = token.expires_in_or(fallback);
    sessions.store_session(username, &access_token, expires_in);
    tracing::info!(user = username, expires_in, "user logged in");
    Ok(token)
}
