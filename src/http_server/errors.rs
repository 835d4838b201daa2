//! HTTP error responses
//!
//! Every failure leaves the server as `{"error": "<message>"}`, including
//! unmatched routes and panics caught at the router boundary.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::books::BookError;

/// JSON error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Error half of a handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a book error onto its status code and message
pub fn book_error(err: BookError) -> ApiError {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(err.to_string())))
}

/// Fallback for unmatched routes
pub async fn not_found() -> ApiError {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found")))
}

/// Response for a handler that panicked. The server keeps running.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    error!(panic = detail, "request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Internal server error")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serialization() {
        let json = serde_json::to_string(&ErrorResponse::new("Book not found")).unwrap();
        assert_eq!(json, r#"{"error":"Book not found"}"#);
    }

    #[test]
    fn test_book_error_mapping() {
        let (status, Json(body)) = book_error(BookError::NotFound);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Book not found");

        let (status, Json(body)) = book_error(BookError::MissingFields);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Title and author are required");
    }

    #[test]
    fn test_panic_response_status() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
