//! Domain-level error type.
//!
//! The error is transport agnostic: it carries a stable [`ErrorCode`] and a
//! client-facing message. The HTTP adapter maps codes to status codes and
//! renders the `{"error": <message>}` envelope.

use serde::Serialize;

/// Message returned for any method other than `GET`.
pub const INCORRECT_HTTP_METHOD: &str = "Incorrect HTTP method";

/// Message returned for an unknown endpoint segment.
pub const INCORRECT_API_ENDPOINT: &str = "Incorrect API endpoint";

/// Message returned for a malformed or out-of-range query parameter.
pub const INCORRECT_GET_PARAMETER: &str = "Incorrect GET parameter value";

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested endpoint does not exist.
    NotFound,
    /// The endpoint exists but does not accept the request method.
    MethodNotAllowed,
    /// An unexpected error occurred inside the service.
    InternalError,
}

/// Error returned by the person service and its adapters.
///
/// # Examples
/// ```
/// use fake_person_api::domain::{Error, ErrorCode, INCORRECT_GET_PARAMETER};
///
/// let err = Error::incorrect_parameter();
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// assert_eq!(err.message(), INCORRECT_GET_PARAMETER);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Build an error from a code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to clients.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::MethodNotAllowed`].
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MethodNotAllowed, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Rejection for a non-`GET` request.
    pub fn incorrect_method() -> Self {
        Self::method_not_allowed(INCORRECT_HTTP_METHOD)
    }

    /// Rejection for an unknown endpoint.
    pub fn incorrect_endpoint() -> Self {
        Self::not_found(INCORRECT_API_ENDPOINT)
    }

    /// Rejection for a bad query parameter.
    pub fn incorrect_parameter() -> Self {
        Self::invalid_request(INCORRECT_GET_PARAMETER)
    }
}
