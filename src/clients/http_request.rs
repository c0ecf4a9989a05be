//! HTTP request types.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the API.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and requesting tokens.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
    /// Form content type (`application/x-www-form-urlencoded`).
    FormUrlEncoded,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
        }
    }
}

/// A request body together with its encoding.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// A JSON document.
    Json(serde_json::Value),
    /// Ordered form fields, percent-encoded on the wire.
    Form(Vec<(String, String)>),
}

impl RequestBody {
    /// Returns the content type of this body.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Json(_) => DataType::Json,
            Self::Form(_) => DataType::FormUrlEncoded,
        }
    }

    /// Encodes the body for sending.
    ///
    /// # Example
    ///
    /// ```rust
    /// use heroes_client::clients::RequestBody;
    ///
    /// let body = RequestBody::Form(vec![
    ///     ("grant_type".to_string(), "password".to_string()),
    ///     ("username".to_string(), "jane doe".to_string()),
    /// ]);
    /// assert_eq!(body.encode(), "grant_type=password&username=jane%20doe");
    /// ```
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::Json(value) => value.to_string(),
            Self::Form(fields) => fields
                .iter()
                .map(|(key, value)| {
                    format!(
                        "{}={}",
                        urlencoding::encode(key),
                        urlencoding::encode(value)
                    )
                })
                .collect::<Vec<_>>()
                .join("&"),
        }
    }
}

/// An HTTP request to be sent to the API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use heroes_client::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "http://localhost:3000/api/heroes")
///     .build()
///     .unwrap();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "http://localhost:3000/api/heroes")
///     .json(json!({"name": "Narco"}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL for this request.
    pub url: String,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Whether the session bearer token is attached.
    pub attach_bearer: bool,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `url` is empty
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.url.trim().is_empty() {
            return Err(InvalidHttpRequestError::MissingUrl);
        }

        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    body: Option<RequestBody>,
    query: Option<HashMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
    attach_bearer: bool,
}

impl HttpRequestBuilder {
    /// Creates a new builder with the required method and URL.
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            body: None,
            query: None,
            extra_headers: None,
            attach_bearer: true,
        }
    }

    /// Sets a JSON request body.
    #[must_use]
    pub fn json(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(RequestBody::Json(body.into()));
        self
    }

    /// Sets a form request body; field order is preserved.
    #[must_use]
    pub fn form(mut self, fields: Vec<(String, String)>) -> Self {
        self.body = Some(RequestBody::Form(fields));
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds a single extra header.
    ///
    /// Extra headers override client defaults and the session bearer token.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Controls whether the session bearer token is attached (default: `true`).
    #[must_use]
    pub const fn attach_bearer(mut self, attach: bool) -> Self {
        self.attach_bearer = attach;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            url: self.url,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
            attach_bearer: self.attach_bearer,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "http://localhost:3000/api/heroes";

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_data_type_content_type() {
        assert_eq!(DataType::Json.as_content_type(), "application/json");
        assert_eq!(
            DataType::FormUrlEncoded.as_content_type(),
            "application/x-www-form-urlencoded"
        );
    }

    #[test]
    fn test_form_body_keeps_field_order() {
        let body = RequestBody::Form(vec![
            ("grant_type".to_string(), "password".to_string()),
            ("username".to_string(), "fakeUserId".to_string()),
            ("password".to_string(), "fakePassword".to_string()),
        ]);
        assert_eq!(
            body.encode(),
            "grant_type=password&username=fakeUserId&password=fakePassword"
        );
        assert_eq!(body.data_type(), DataType::FormUrlEncoded);
    }

    #[test]
    fn test_form_body_percent_encodes_reserved_characters() {
        let body = RequestBody::Form(vec![("password".to_string(), "a&b=c".to_string())]);
        assert_eq!(body.encode(), "password=a%26b%3Dc");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, URL).build().unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.url, URL);
        assert!(request.body.is_none());
        assert!(request.attach_bearer);
    }

    #[test]
    fn test_builder_creates_valid_post_request() {
        let request = HttpRequest::builder(HttpMethod::Post, URL)
            .json(json!({"name": "Narco"}))
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Post);
        assert_eq!(
            request.body.map(|body| body.data_type()),
            Some(DataType::Json)
        );
    }

    #[test]
    fn test_verify_requires_body_for_post_and_put() {
        let result = HttpRequest::builder(HttpMethod::Post, URL).build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));

        let result = HttpRequest::builder(HttpMethod::Put, URL).build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "put"
        ));
    }

    #[test]
    fn test_verify_requires_url() {
        let result = HttpRequest::builder(HttpMethod::Get, " ").build();
        assert!(matches!(result, Err(InvalidHttpRequestError::MissingUrl)));
    }

    #[test]
    fn test_builder_with_headers_and_query() {
        let request = HttpRequest::builder(HttpMethod::Get, URL)
            .header("X-Custom-Header", "custom-value")
            .query_param("name", "Nar")
            .attach_bearer(false)
            .build()
            .unwrap();

        let headers = request.extra_headers.unwrap();
        assert_eq!(
            headers.get("X-Custom-Header"),
            Some(&"custom-value".to_string())
        );
        assert_eq!(request.query.unwrap().get("name"), Some(&"Nar".to_string()));
        assert!(!request.attach_bearer);
    }
}
