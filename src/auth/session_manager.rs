//! Cookie-backed session management.
//!
//! [`SessionManager`] owns the two session cookies: the logged-in username
//! under [`USER_ID_KEY`] and the bearer token under [`TOKEN_ID_KEY`]. It is
//! constructed over any [`CookieStore`], so tests and headless callers can
//! supply their own storage.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use std::sync::Arc;
//! use heroes_client::auth::{MemoryCookieJar, SessionManager};
//!
//! let sessions = SessionManager::new(Arc::new(MemoryCookieJar::new()));
//! sessions.store_session("fakeUserId", "abc", 60);
//!
//! let mut headers = HashMap::new();
//! sessions.add_header_authorization(&mut headers);
//! assert_eq!(headers.get("Authorization").map(String::as_str), Some("Bearer abc"));
//!
//! sessions.clear_cookies();
//! assert_eq!(sessions.user_logged(), "");
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::auth::cookies::{format_expires, Cookie, CookieStore};
use crate::auth::oauth::AuthError;
use crate::auth::{Session, TokenResponse};

/// Cookie holding the logged-in username.
pub const USER_ID_KEY: &str = "user_id";

/// Cookie holding the bearer token.
pub const TOKEN_ID_KEY: &str = "token_id";

/// Longest lifetime accepted for a session cookie (100 years).
const MAX_LIFETIME_SECONDS: i64 = 100 * 365 * 24 * 60 * 60;

/// Reads and writes the session cookies.
///
/// # Thread Safety
///
/// `SessionManager` is `Clone`, `Send` and `Sync`; clones share the same
/// cookie store.
#[derive(Clone, Debug)]
pub struct SessionManager {
    cookies: Arc<dyn CookieStore>,
}

// Verify SessionManager is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SessionManager>();
};

impl SessionManager {
    /// Creates a session manager over the given cookie store.
    #[must_use]
    pub fn new(cookies: Arc<dyn CookieStore>) -> Self {
        Self { cookies }
    }

    /// Returns the underlying cookie store.
    #[must_use]
    pub fn cookie_store(&self) -> &Arc<dyn CookieStore> {
        &self.cookies
    }

    /// Returns the logged-in username, or `""` when nobody is logged in.
    #[must_use]
    pub fn user_logged(&self) -> String {
        self.cookies.get(USER_ID_KEY).unwrap_or_default()
    }

    /// Returns the bearer token, or `""` when there is none.
    #[must_use]
    pub fn token(&self) -> String {
        self.cookies.get(TOKEN_ID_KEY).unwrap_or_default()
    }

    /// Returns `true` if a bearer token is stored.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.token().is_empty()
    }

    /// Assembles the current session from the cookies.
    ///
    /// Returns `None` unless both the username and the token are present.
    #[must_use]
    pub fn current_session(&self) -> Option<Session> {
        let user = self.cookies.cookie(USER_ID_KEY)?;
        let token = self.cookies.cookie(TOKEN_ID_KEY)?;
        if token.value.is_empty() {
            return None;
        }
        Some(Session::new(
            user.value,
            token.value,
            user.expires.min(token.expires),
        ))
    }

    /// Computes the absolute expiry `now + seconds`.
    #[must_use]
    pub fn expiry_at(seconds: i64) -> DateTime<Utc> {
        let seconds = seconds.clamp(-MAX_LIFETIME_SECONDS, MAX_LIFETIME_SECONDS);
        Utc::now() + Duration::seconds(seconds)
    }

    /// Returns the cookie `expires` string for `now + seconds`.
    #[must_use]
    pub fn expiry_string(seconds: i64) -> String {
        format_expires(Self::expiry_at(seconds))
    }

    /// Stores the username, expiring at `expires`.
    pub fn add_user_info(&self, username: &str, expires: DateTime<Utc>) {
        self.cookies.set(Cookie::new(USER_ID_KEY, username, expires));
    }

    /// Stores the response's access token, expiring at `expires`.
    ///
    /// A response without an access token writes nothing.
    pub fn add_token_info(&self, token: &TokenResponse, expires: DateTime<Utc>) {
        if let Some(access_token) = token.access_token() {
            self.cookies.set(Cookie::new(TOKEN_ID_KEY, access_token, expires));
        }
    }

    /// Stores both session cookies with one shared expiry.
    pub fn store_session(&self, username: &str, access_token: &str, expires_in: i64) -> Session {
        let expires = Self::expiry_at(expires_in);
        self.add_user_info(username, expires);
        self.cookies
            .set(Cookie::new(TOKEN_ID_KEY, access_token, expires));

        tracing::debug!(user = username, expires = %format_expires(expires), "session stored");
        Session::new(username.to_string(), access_token.to_string(), expires)
    }

    /// Sets `Authorization: Bearer <token>` when a token is stored.
    ///
    /// Leaves `headers` untouched otherwise.
    pub fn add_header_authorization(&self, headers: &mut HashMap<String, String>) {
        let token = self.token();
        if !token.is_empty() {
            headers.insert("Authorization".to_string(), format!("Bearer {token}"));
        }
    }

    /// Gates an action on the user being logged in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] when no token is stored.
    pub fn check_authentication(&self) -> Result<(), AuthError> {
        if self.is_authenticated() {
            Ok(())
        } else {
            tracing::debug!("action requires an authenticated user");
            Err(AuthError::NotAuthenticated)
        }
    }

    /// Deletes both session cookies.
    pub fn clear_cookies(&self) {
        self.cookies.remove(TOKEN_ID_KEY);
        self.cookies.remove(USER_ID_KEY);
    }
}
