//! Hero service error types.
//!
//! - [`ServiceError::NotFound`]: The hero does not exist (404)
//! - [`ServiceError::InvalidBody`]: The response could not be decoded
//! - [`ServiceError::Http`]: Wrapped HTTP client error
//!
//! Delete does not use these for non-2xx answers; it reports them through
//! [`ServiceResult::ok`](crate::heroes::ServiceResult).

use crate::clients::{HttpError, InvalidHttpRequestError};
use thiserror::Error;

/// Error type for hero service operations.
///
/// # Example
///
/// ```rust
/// use heroes_client::heroes::ServiceError;
///
/// let error = ServiceError::NotFound { id: 42 };
/// assert!(error.to_string().contains("42"));
/// ```
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The hero was not found.
    #[error("Hero with id {id} not found")]
    NotFound {
        /// The requested identifier.
        id: u64,
    },

    /// The response body did not decode as expected.
    #[error("Invalid response body: {message}")]
    InvalidBody {
        /// The decoding failure.
        message: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl From<InvalidHttpRequestError> for ServiceError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Http(HttpError::InvalidRequest(error))
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidBody {
            message: error.to_string(),
        }
    }
}

// Verify ServiceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ServiceError>();
};
