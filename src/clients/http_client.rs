//! HTTP client for API communication.
//!
//! This module provides the [`HttpClient`] type for sending requests to the
//! heroes API, attaching the session bearer token when one is stored.

use std::collections::HashMap;

use crate::auth::SessionManager;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ApiConfig;

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the API.
///
/// The client handles:
/// - Default headers including User-Agent and Accept
/// - `Authorization: Bearer` from the session, when a token is stored
/// - Body encoding and `Content-Type`
/// - Decoding of JSON response bodies
///
/// Every call is a single round trip; nothing is retried or cached.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use heroes_client::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(&config, Some(sessions.clone()));
///
/// let request = HttpRequest::builder(HttpMethod::Get, config.heroes_url())
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Session used for bearer authorization.
    sessions: Option<SessionManager>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration providing the `user_agent_prefix`
    /// * `sessions` - Session whose bearer token is attached to requests
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &ApiConfig, sessions: Option<SessionManager>) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Heroes Client v{CLIENT_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            default_headers,
            sessions,
        }
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the session used for bearer authorization, if any.
    #[must_use]
    pub const fn sessions(&self) -> Option<&SessionManager> {
        self.sessions.as_ref()
    }

    /// Builds the header set for a request.
    ///
    /// Precedence, lowest first: client defaults, session bearer token,
    /// body content type, request extra headers.
    #[must_use]
    pub fn headers_for(&self, request: &HttpRequest) -> HashMap<String, String> {
        let mut headers = self.default_headers.clone();

        if request.attach_bearer {
            if let Some(sessions) = &self.sessions {
                sessions.add_header_authorization(&mut headers);
            }
        }

        if let Some(body) = &request.body {
            headers.insert(
                "Content-Type".to_string(),
                body.data_type().as_content_type().to_string(),
            );
        }

        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        headers
    }

    /// Sends a request and returns the response whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let headers = self.headers_for(&request);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.encode());
        }

        tracing::debug!(
            method = %request.http_method,
            url = %request.url,
            "sending request"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                // Non-JSON error bodies are kept verbatim
                if (200..300).contains(&code) {
                    serde_json::json!({})
                } else {
                    serde_json::json!({ "raw_body": body_text })
                }
            })
        };

        tracing::debug!(code, url = %request.url, "received response");

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Sends a request, turning non-2xx responses into errors.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let response = self.send(request).await?;

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code: response.code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes the error fields of a response body to JSON.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for field in ["errors", "error", "error_description", "message", "raw_body"] {
            if let Some(value) = response.body.get(field) {
                error_body.insert(field.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryCookieJar;
    use crate::config::{ApiUrl, ClientId, ClientSecret};
    use std::sync::Arc;

    fn create_test_config(prefix: Option<&str>) -> ApiConfig {
        let mut builder = ApiConfig::builder()
            .api_url(ApiUrl::new("http://localhost:3000/api").unwrap())
            .client_id(ClientId::new("client").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap());
        if let Some(prefix) = prefix {
            builder = builder.user_agent_prefix(prefix);
        }
        builder.build().unwrap()
    }

    fn create_sessions() -> SessionManager {
        SessionManager::new(Arc::new(MemoryCookieJar::new()))
    }

    fn get_request() -> HttpRequest {
        HttpRequest::builder(HttpMethod::Get, "http://localhost:3000/api/heroes")
            .build()
            .unwrap()
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config(None), None);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Heroes Client v"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let client = HttpClient::new(&create_test_config(Some("MyApp/1.0")), None);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config(None), None);
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_bearer_header_injected_from_session() {
        let sessions = create_sessions();
        sessions.store_session("user", "abc", 60);
        let client = HttpClient::new(&create_test_config(None), Some(sessions));

        let headers = client.headers_for(&get_request());
        assert_eq!(headers.get("Authorization"), Some(&"Bearer abc".to_string()));
    }

    #[test]
    fn test_no_bearer_header_without_token() {
        let client = HttpClient::new(&create_test_config(None), Some(create_sessions()));

        let headers = client.headers_for(&get_request());
        assert!(headers.get("Authorization").is_none());
    }

    #[test]
    fn test_bearer_header_skipped_when_disabled() {
        let sessions = create_sessions();
        sessions.store_session("user", "abc", 60);
        let client = HttpClient::new(&create_test_config(None), Some(sessions));

        let request = HttpRequest::builder(HttpMethod::Get, "http://localhost:3000/api/heroes")
            .attach_bearer(false)
            .build()
            .unwrap();
        assert!(client.headers_for(&request).get("Authorization").is_none());
    }

    #[test]
    fn test_extra_headers_override_session_token() {
        let sessions = create_sessions();
        sessions.store_session("user", "abc", 60);
        let client = HttpClient::new(&create_test_config(None), Some(sessions));

        let request = HttpRequest::builder(HttpMethod::Get, "http://localhost:3000/api/heroes")
            .header("Authorization", "Basic xyz")
            .build()
            .unwrap();
        assert_eq!(
            client.headers_for(&request).get("Authorization"),
            Some(&"Basic xyz".to_string())
        );
    }

    #[test]
    fn test_serialize_error_keeps_oauth_fields() {
        let response = HttpResponse::new(
            400,
            HashMap::new(),
            serde_json::json!({"error": "invalid_grant", "error_description": "Bad credentials", "other": 1}),
        );
        let message = HttpClient::serialize_error(&response);
        assert!(message.contains("invalid_grant"));
        assert!(message.contains("Bad credentials"));
        assert!(!message.contains("other"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
