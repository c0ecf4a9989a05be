//! HTTP client types for API communication.
//!
//! This module provides the request/response layer shared by the
//! authentication gateway and the hero data service.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`RequestBody`]: A JSON or form body
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use heroes_client::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let client = HttpClient::new(&config, Some(sessions));
//!
//! let request = HttpRequest::builder(HttpMethod::Get, config.heroes_url())
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Failure Behavior
//!
//! Requests are sent exactly once. [`HttpClient::request`] maps non-2xx
//! statuses to [`HttpError::Response`]; [`HttpClient::send`] hands back the
//! response so callers can inspect [`HttpResponse::is_ok`] themselves.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder, RequestBody};
pub use http_response::HttpResponse;
