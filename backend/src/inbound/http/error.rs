//! HTTP adapter mapping for domain errors.
//!
//! Every failure is rendered as `{"error": <message>}` with the status code
//! chosen by [`ErrorCode`]. Internal errors are logged and redacted.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::error;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn client_message(error: &Error) -> &str {
    if matches!(error.code(), ErrorCode::InternalError) {
        REDACTED_MESSAGE
    } else {
        error.message()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(error = %self, "internal error returned to client");
        }
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: client_message(self),
        })
    }
}
