//! API error types with HTTP response mapping.

use application::UseCaseError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::Notification;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Validation failed; carries the full fail-slow error list.
    UnprocessableEntity(Notification),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                let body = serde_json::json!({ "message": message });
                (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
            }
            ApiError::UnprocessableEntity(notification) => {
                let errors: Vec<_> = notification
                    .errors()
                    .iter()
                    .map(|e| serde_json::json!({ "message": e.message }))
                    .collect();
                let body = serde_json::json!({ "errors": errors });
                (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response()
            }
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "internal server error");
                let body = serde_json::json!({ "error": message });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}

impl From<UseCaseError> for ApiError {
    fn from(err: UseCaseError) -> Self {
        match err {
            UseCaseError::Validation(notification) => ApiError::UnprocessableEntity(notification),
            UseCaseError::NotFound(domain_error) => ApiError::NotFound(domain_error.to_string()),
            UseCaseError::Store(store_error) => ApiError::Internal(store_error.to_string()),
        }
    }
}
