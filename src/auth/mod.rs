//! Authentication and session types for the heroes client.
//!
//! This module covers everything between a username/password pair and a
//! bearer token attached to API calls.
//!
//! # Overview
//!
//! - [`Credentials`]: A username and password for the password grant
//! - [`ClientIdentity`]: The OAuth client id and secret (HTTP Basic)
//! - [`TokenResponse`]: The decoded token endpoint response
//! - [`CookieStore`] / [`MemoryCookieJar`]: Where session cookies live
//! - [`SessionManager`]: Reads and writes the session cookies
//! - [`Session`]: The logged-in user assembled from the cookies
//! - [`oauth`]: The login gateways
//!
//! # Session Cookies
//!
//! A session is two cookies sharing one expiry:
//!
//! - `user_id`: the username that logged in
//! - `token_id`: the opaque access token
//!
//! Both are written on login and deleted on logout. Once they expire the
//! user is treated as logged out.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use heroes_client::auth::{MemoryCookieJar, SessionManager};
//!
//! let sessions = SessionManager::new(Arc::new(MemoryCookieJar::new()));
//! assert!(sessions.check_authentication().is_err());
//!
//! sessions.store_session("fakeUserId", "12345-67890-5555", 3600);
//! assert!(sessions.check_authentication().is_ok());
//! assert_eq!(sessions.user_logged(), "fakeUserId");
//! ```

mod cookies;
mod credentials;
pub mod oauth;
pub mod session;
mod session_manager;
mod token;

pub use cookies::{
    format_expires, parse_expires, Cookie, CookieParseError, CookieStore, MemoryCookieJar,
};
pub use credentials::{ClientIdentity, Credentials};
pub use oauth::{AuthError, AuthGateway};
pub use session::Session;
pub use session_manager::{SessionManager, TOKEN_ID_KEY, USER_ID_KEY};
pub use token::{TokenResponse, MOCK_ACCESS_TOKEN, MOCK_TOKEN_TYPE};
