//! Token endpoint response types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Placeholder access token handed out in the mock environment.
pub const MOCK_ACCESS_TOKEN: &str = "12345-67890-5555";

/// Placeholder token type handed out in the mock environment.
pub const MOCK_TOKEN_TYPE: &str = "bearer";

/// Decoded body of a password-grant token response.
///
/// Every field is optional: the endpoint may omit any of them, and the
/// caller receives exactly what was decoded. Fields not listed here are
/// kept in `extra`.
///
/// # Example
///
/// ```rust
/// use heroes_client::auth::TokenResponse;
///
/// let body = r#"{"access_token":"abc","token_type":"bearer","expires_in":600}"#;
/// let token: TokenResponse = serde_json::from_str(body).unwrap();
///
/// assert!(token.has_access_token());
/// assert_eq!(token.expires_in_or(3600), 600);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The bearer token for authenticated requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// The token type, normally `bearer`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,

    /// Token lifetime in seconds.
    ///
    /// Numbers, floats and numeric strings are accepted. Anything else
    /// decodes as `None`.
    #[serde(
        default,
        deserialize_with = "lenient_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_in: Option<i64>,

    /// Refresh token. Stored nowhere; nothing refreshes sessions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Granted scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Any other fields of the response body.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenResponse {
    /// Returns the access token when present and non-empty.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|token| !token.is_empty())
    }

    /// Returns `true` if the response carries a usable access token.
    #[must_use]
    pub fn has_access_token(&self) -> bool {
        self.access_token().is_some()
    }

    /// Returns the token lifetime, or `fallback` when absent or not positive.
    #[must_use]
    pub fn expires_in_or(&self, fallback: i64) -> i64 {
        self.expires_in.filter(|seconds| *seconds > 0).unwrap_or(fallback)
    }

    /// Builds the fixed response used by the mock environment.
    #[must_use]
    pub fn mock(expires_in: i64) -> Self {
        Self {
            access_token: Some(MOCK_ACCESS_TOKEN.to_string()),
            token_type: Some(MOCK_TOKEN_TYPE.to_string()),
            expires_in: Some(expires_in),
            ..Self::default()
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn seconds_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|seconds| seconds as i64)),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().map(|seconds| seconds as i64))
        }
        _ => None,
    }
}

fn lenient_seconds<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(seconds_from_value(&value))
}
