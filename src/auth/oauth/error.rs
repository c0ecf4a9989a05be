//! Authentication error types.
//!
//! - [`AuthError::TokenRequestFailed`]: The token endpoint answered with a
//!   non-2xx status or an undecodable body
//! - [`AuthError::MissingAccessToken`]: The token endpoint answered 2xx but
//!   without an access token
//! - [`AuthError::NotAuthenticated`]: An action needs a logged-in user
//! - [`AuthError::HttpError`]: Wrapped HTTP client error
//!
//! # Example
//!
//! ```rust
//! use heroes_client::auth::oauth::AuthError;
//!
//! let error = AuthError::TokenRequestFailed {
//!     status: 401,
//!     message: "Bad credentials".to_string(),
//! };
//! assert!(error.to_string().contains("401"));
//! ```

use crate::auth::TokenResponse;
use crate::clients::{HttpError, InvalidHttpRequestError};
use thiserror::Error;

/// Errors that can occur while logging in or gating on a session.
///
/// # Thread Safety
///
/// `AuthError` is `Send + Sync`, making it safe to use across async boundaries.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token request failed.
    ///
    /// No distinction is made between 400, 401 and 5xx beyond the status.
    /// Transport failures surface as [`AuthError::HttpError`] instead.
    #[error("Token request failed with status {status}: {message}")]
    TokenRequestFailed {
        /// The HTTP status code returned.
        status: u16,
        /// The response body or decoding failure.
        message: String,
    },

    /// The token endpoint succeeded without returning an access token.
    ///
    /// No session is written. The decoded body is kept so callers can
    /// still inspect what the endpoint sent.
    #[error("Token response did not contain an access token")]
    MissingAccessToken {
        /// The decoded response body.
        response: Box<TokenResponse>,
    },

    /// No user is logged in.
    #[error("User is not authenticated")]
    NotAuthenticated,

    /// Wrapped HTTP client error.
    #[error(transparent)]
    HttpError(#[from] HttpError),
}

impl From<InvalidHttpRequestError> for AuthError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::HttpError(HttpError::InvalidRequest(error))
    }
}

// Verify AuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthError>();
};
