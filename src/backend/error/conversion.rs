/**
 * Error Conversion
 *
 * This module converts gateway errors into HTTP responses.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 403,
 *   "detail": "token expired"
 * }
 * ```
 *
 * `detail` is only present on 403 responses.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::backend::error::types::AuthError;

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorBody {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status: status.as_u16(),
            detail: None,
        }
    }
}

impl IntoResponse for AuthError {
    /// Convert a gateway error into an HTTP response
    ///
    /// Infrastructure failures are logged here with their cause; the body
    /// only carries a generic message.
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_internal() {
            tracing::error!("Request failed: {}", self);
        }

        let body = ErrorBody {
            error: self.message(),
            status: status.as_u16(),
            detail: self.detail().map(str::to_string),
        };

        (status, Json(body)).into_response()
    }
}

/// Fallback handler for unknown routes
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new(StatusCode::NOT_FOUND, "Not found")),
    )
        .into_response()
}
