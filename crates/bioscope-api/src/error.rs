//! API error types and JSON error response formatting.
//!
//! ApiError maps internal failures to HTTP status codes and a consistent
//! JSON body. User-facing messages stay terse; diagnostic detail is
//! logged, not returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use bioscope_summarize::SummarizeError;

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code (e.g., "bad_request", "not_found").
    pub error: String,
    /// Human-readable error message.
    pub message: String,
}

/// API error type that maps to HTTP status codes and JSON responses.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request - missing or invalid parameters.
    BadRequest(String),
    /// 404 Not Found - resource does not exist.
    NotFound(String),
    /// 429 Too Many Requests - rate limit exceeded.
    TooManyRequests(String),
    /// 500 Internal Server Error - unexpected server error.
    Internal(String),
    /// 502 Bad Gateway - the summarization upstream failed.
    BadGateway(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::TooManyRequests(msg) => {
                (StatusCode::TOO_MANY_REQUESTS, "too_many_requests", msg)
            }
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, "bad_gateway", msg),
        };

        let body = ErrorBody {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<SummarizeError> for ApiError {
    fn from(err: SummarizeError) -> Self {
        tracing::warn!(error = %err, "Summarization request failed");
        match err {
            SummarizeError::MissingApiKey => {
                ApiError::Internal("Summarization is not configured".to_string())
            }
            // Detail stays in the log; the client sees a terse message.
            _ => ApiError::BadGateway("Failed to get AI summary".to_string()),
        }
    }
}

impl From<bioscope_core::BioscopeError> for ApiError {
    fn from(err: bioscope_core::BioscopeError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(status_of(ApiError::BadRequest("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(ApiError::NotFound("x".into())), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(ApiError::TooManyRequests("x".into())),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            status_of(ApiError::Internal("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(status_of(ApiError::BadGateway("x".into())), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_upstream_failure_is_terse() {
        let err: ApiError = SummarizeError::Upstream {
            status: 500,
            message: "stack trace with internals".to_string(),
        }
        .into();
        match err {
            ApiError::BadGateway(msg) => assert_eq!(msg, "Failed to get AI summary"),
            other => panic!("expected BadGateway, got {:?}", other),
        }
    }
}
