//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::services::credit_service::ServiceError;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Status Code Mapping
///
/// - `CreditNotFound` → 404 Not Found
/// - `OperationRejected` → 400 Bad Request
/// - `Service` → 500 Internal Server Error (hides details from the client)
///
/// Only the payment, consumption, and transaction endpoints downgrade
/// service failures to `OperationRejected`; every other endpoint lets the
/// underlying error surface as a 500. That asymmetry is deliberate: those
/// three operations treat any failure as a rejected business operation,
/// while plain CRUD failures are infrastructure problems.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Service layer failed on a path with no explicit error mapping.
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    /// Requested credit does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Credit not found")]
    CreditNotFound,

    /// A balance-mutating operation was refused, for any reason.
    ///
    /// Returns HTTP 400 Bad Request. No error-kind discrimination is
    /// performed: business-rule violations and infrastructure failures on
    /// the payment, consumption, and transaction endpoints all land here.
    #[error("Operation rejected")]
    OperationRejected,
}

/// Convert AppError into an HTTP response.
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            AppError::CreditNotFound => {
                (StatusCode::NOT_FOUND, "credit_not_found", self.to_string())
            }
            AppError::OperationRejected => (
                StatusCode::BAD_REQUEST,
                "operation_rejected",
                self.to_string(),
            ),
            AppError::Service(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        };

        // Build JSON response body
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
