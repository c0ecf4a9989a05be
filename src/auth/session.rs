//! Session state for an authenticated user.
//!
//! This module provides the [`Session`] type, the view of the logged-in
//! user assembled from the session cookies.

use chrono::{DateTime, Utc};

/// The logged-in user, their bearer token and when both stop being valid.
///
/// # Thread Safety
///
/// `Session` is `Send + Sync`, making it safe to share across threads.
///
/// # Example
///
/// ```rust
/// use heroes_client::Session;
/// use chrono::{Duration, Utc};
///
/// let session = Session::new(
///     "fakeUserId".to_string(),
///     "access-token".to_string(),
///     Utc::now() + Duration::hours(1),
/// );
///
/// assert!(session.is_active());
/// assert!(!session.expired());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// The username submitted at login.
    pub username: String,

    /// The bearer token for API authentication.
    pub access_token: String,

    /// When the session cookies expire.
    pub expires: DateTime<Utc>,
}

impl Session {
    /// Creates a new session.
    #[must_use]
    pub const fn new(username: String, access_token: String, expires: DateTime<Utc>) -> Self {
        Self {
            username,
            access_token,
            expires,
        }
    }

    /// Returns `true` if this session has expired.
    #[must_use]
    pub fn expired(&self) -> bool {
        Utc::now() >= self.expires
    }

    /// Returns `true` if this session is active (not expired and has access token).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.access_token.is_empty() && !self.expired()
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
