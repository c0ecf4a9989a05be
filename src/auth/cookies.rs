//! Cookie storage for session state.
//!
//! This module provides the [`Cookie`] type, the [`CookieStore`] trait that
//! session management is written against, and [`MemoryCookieJar`], an
//! in-process store that enforces expiry on read the way a browser does.
//!
//! # Wire Format
//!
//! Cookies serialize as `name=value; expires=<UTC date>; path=/` where the
//! date uses the RFC 1123 form, e.g. `Thu, 01 Jan 1970 00:00:00 GMT`.
//!
//! # Example
//!
//! ```rust
//! use heroes_client::auth::{Cookie, CookieStore, MemoryCookieJar};
//! use chrono::{Duration, Utc};
//!
//! let jar = MemoryCookieJar::new();
//! jar.set(Cookie::new("user_id", "fakeUserId", Utc::now() + Duration::seconds(60)));
//! assert_eq!(jar.get("user_id").as_deref(), Some("fakeUserId"));
//!
//! jar.set(Cookie::expired("user_id"));
//! assert_eq!(jar.get("user_id"), None);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use thiserror::Error;

/// Format of the `expires` attribute.
pub const EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Path every session cookie is written with.
pub const ROOT_PATH: &str = "/";

/// A single cookie entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cookie {
    /// Cookie name.
    pub name: String,
    /// Cookie value.
    pub value: String,
    /// Absolute expiry time.
    pub expires: DateTime<Utc>,
    /// Path scope.
    pub path: String,
}

impl Cookie {
    /// Creates a cookie scoped to the root path.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>, expires: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            expires,
            path: ROOT_PATH.to_string(),
        }
    }

    /// Creates an empty cookie dated at the Unix epoch.
    ///
    /// Writing it deletes any stored cookie with the same name.
    #[must_use]
    pub fn expired(name: impl Into<String>) -> Self {
        Self::new(name, "", DateTime::<Utc>::from(std::time::UNIX_EPOCH))
    }

    /// Returns `true` if the cookie has expired at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires <= now
    }

    /// Returns `true` if the cookie has expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Returns the `expires` attribute value.
    #[must_use]
    pub fn expires_string(&self) -> String {
        format_expires(self.expires)
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}; expires={}; path={}",
            self.name,
            self.value,
            self.expires_string(),
            self.path
        )
    }
}

/// Error returned when a cookie string cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CookieParseError {
    /// The leading `name=value` pair is missing or has an empty name.
    #[error("Cookie '{input}' has no name=value pair")]
    MissingPair {
        /// The rejected input.
        input: String,
    },

    /// The `expires` attribute is missing.
    #[error("Cookie '{name}' has no expires attribute")]
    MissingExpires {
        /// Name of the cookie.
        name: String,
    },

    /// The `expires` attribute is not a valid UTC date.
    #[error("Cookie expires attribute '{value}' is not a valid UTC date")]
    InvalidExpires {
        /// The rejected attribute value.
        value: String,
    },
}

impl FromStr for Cookie {
    type Err = CookieParseError;

    /// Parses `name=value; expires=<date>; path=<path>`.
    ///
    /// Attribute names are case-insensitive; a missing path defaults to `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(';').map(str::trim);

        let (name, value) = parts
            .next()
            .and_then(|pair| pair.split_once('='))
            .filter(|(name, _)| !name.trim().is_empty())
            .ok_or_else(|| CookieParseError::MissingPair {
                input: s.to_string(),
            })?;

        let mut expires = None;
        let mut path = ROOT_PATH.to_string();
        for attribute in parts {
            let (key, val) = attribute.split_once('=').unwrap_or((attribute, ""));
            match key.trim().to_ascii_lowercase().as_str() {
                "expires" => expires = Some(parse_expires(val.trim())?),
                "path" => path = val.trim().to_string(),
                _ => {}
            }
        }

        let name = name.trim().to_string();
        let expires = expires.ok_or_else(|| CookieParseError::MissingExpires {
            name: name.clone(),
        })?;

        Ok(Self {
            name,
            value: value.trim().to_string(),
            expires,
            path,
        })
    }
}

/// Formats an instant as a cookie `expires` value.
#[must_use]
pub fn format_expires(instant: DateTime<Utc>) -> String {
    instant.format(EXPIRES_FORMAT).to_string()
}

/// Parses a cookie `expires` value.
///
/// # Errors
///
/// Returns [`CookieParseError::InvalidExpires`] if the value is not an
/// RFC 1123 date.
pub fn parse_expires(value: &str) -> Result<DateTime<Utc>, CookieParseError> {
    DateTime::parse_from_rfc2822(value)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| CookieParseError::InvalidExpires {
            value: value.to_string(),
        })
}

/// Storage backing the session cookies.
///
/// Implementations must treat a cookie whose expiry has passed as absent,
/// and writing an already-expired cookie must delete the entry.
pub trait CookieStore: Send + Sync + fmt::Debug {
    /// Returns the value of a live cookie.
    fn get(&self, name: &str) -> Option<String>;

    /// Returns the full live cookie, including its expiry.
    fn cookie(&self, name: &str) -> Option<Cookie>;

    /// Writes a cookie, replacing any entry with the same name.
    fn set(&self, cookie: Cookie);

    /// Deletes a cookie by writing an already-expired entry.
    fn remove(&self, name: &str) {
        self.set(Cookie::expired(name));
    }
}

/// An in-memory [`CookieStore`].
///
/// Expired entries are purged lazily when read.
///
/// # Thread Safety
///
/// The jar is `Send + Sync`; every access takes a short lock.
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    cookies: Mutex<HashMap<String, Cookie>>,
}

impl MemoryCookieJar {
    /// Creates an empty jar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a cookie given as a `name=value; expires=...; path=/` string.
    ///
    /// # Errors
    ///
    /// Returns [`CookieParseError`] if the string is malformed.
    pub fn set_cookie_str(&self, cookie: &str) -> Result<(), CookieParseError> {
        let cookie: Cookie = cookie.parse()?;
        self.set(cookie);
        Ok(())
    }

    /// Returns the number of live cookies.
    #[must_use]
    pub fn len(&self) -> usize {
        let now = Utc::now();
        self.cookies
            .lock()
            .values()
            .filter(|cookie| !cookie.is_expired_at(now))
            .count()
    }

    /// Returns `true` if the jar holds no live cookies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CookieStore for MemoryCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        self.cookie(name).map(|cookie| cookie.value)
    }

    fn cookie(&self, name: &str) -> Option<Cookie> {
        let mut cookies = self.cookies.lock();
        match cookies.get(name) {
            Some(cookie) if cookie.is_expired() => {
                cookies.remove(name);
                None
            }
            other => other.cloned(),
        }
    }

    fn set(&self, cookie: Cookie) {
        let mut cookies = self.cookies.lock();
        if cookie.is_expired() {
            cookies.remove(&cookie.name);
        } else {
            cookies.insert(cookie.name.clone(), cookie);
        }
    }
}

// Verify MemoryCookieJar is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MemoryCookieJar>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_cookie_display_format() {
        let expires = Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap();
        let cookie = Cookie::new("token_id", "aaabbbccc", expires);

        assert_eq!(
            cookie.to_string(),
            "token_id=aaabbbccc; expires=Wed, 02 Jan 2030 03:04:05 GMT; path=/"
        );
    }

    #[test]
    fn test_expired_cookie_is_dated_at_epoch() {
        let cookie = Cookie::expired("user_id");
        assert_eq!(cookie.expires_string(), "Thu, 01 Jan 1970 00:00:00 GMT");
        assert!(cookie.is_expired());
    }

    #[test]
    fn test_parse_cookie_string() {
        let cookie: Cookie = "user_id=testUser; expires=Wed, 02 Jan 2030 03:04:05 GMT; path=/"
            .parse()
            .unwrap();

        assert_eq!(cookie.name, "user_id");
        assert_eq!(cookie.value, "testUser");
        assert_eq!(cookie.path, "/");
        assert_eq!(
            cookie.expires,
            Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_malformed_cookies() {
        assert!(matches!(
            "no-pair".parse::<Cookie>(),
            Err(CookieParseError::MissingPair { .. })
        ));
        assert!(matches!(
            "a=b; path=/".parse::<Cookie>(),
            Err(CookieParseError::MissingExpires { .. })
        ));
        assert!(matches!(
            "a=b; expires=tomorrow".parse::<Cookie>(),
            Err(CookieParseError::InvalidExpires { .. })
        ));
    }

    #[test]
    fn test_jar_hides_expired_cookies() {
        let jar = MemoryCookieJar::new();
        jar.set(Cookie::new("live", "1", Utc::now() + Duration::hours(1)));
        jar.set(Cookie {
            name: "stale".to_string(),
            value: "2".to_string(),
            expires: Utc::now() - Duration::seconds(1),
            path: ROOT_PATH.to_string(),
        });

        assert_eq!(jar.get("live").as_deref(), Some("1"));
        assert_eq!(jar.get("stale"), None);
        assert_eq!(jar.len(), 1);
    }

    #[test]
    fn test_jar_remove_deletes_entry() {
        let jar = MemoryCookieJar::new();
        jar.set(Cookie::new("user_id", "someone", Utc::now() + Duration::hours(1)));
        jar.remove("user_id");

        assert_eq!(jar.get("user_id"), None);
        assert!(jar.is_empty());
    }

    #[test]
    fn test_jar_accepts_cookie_strings() {
        let jar = MemoryCookieJar::new();
        let expires = format_expires(Utc::now() + Duration::hours(1));
        jar.set_cookie_str(&format!("token_id=aaabbbccc; expires={expires}; path=/"))
            .unwrap();

        assert_eq!(jar.get("token_id").as_deref(), Some("aaabbbccc"));
        assert_eq!(jar.len(), 1);
    }
}
