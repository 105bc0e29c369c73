//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Lookup by id, username or referenced key failed
    #[error("{0}")]
    NotFound(String),

    /// Login attempted with a password that does not match
    #[error("{0}")]
    InvalidCredentials(String),

    /// Request could not be turned into a domain value
    #[error("{0}")]
    InvalidResource(String),

    /// Field-level validation failures keyed by field path
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(BTreeMap<String, String>),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
}

impl AppError {
    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials(_)
            | AppError::InvalidResource(_)
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::NotFound(detail) => format!("Resource not found: {}", detail),
            AppError::InvalidCredentials(detail) | AppError::InvalidResource(detail) => {
                format!("Invalid resource: {}", detail)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::Validation(_) => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Field errors are returned as a flat field -> message object
        if let AppError::Validation(fields) = self {
            return (status, Json(fields)).into_response();
        }

        let body = ErrorResponse {
            message: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found<F>(self, detail: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found<F>(self, detail: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| AppError::NotFound(detail()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(detail: impl Into<String>) -> Self {
        AppError::NotFound(detail.into())
    }

    pub fn invalid_resource(detail: impl Into<String>) -> Self {
        AppError::InvalidResource(detail.into())
    }

    /// Validation failure for a single field
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation(BTreeMap::from([(field.into(), message.into())]))
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let (status, body) = body_json(AppError::not_found("There is no pet with id 999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["message"],
            "Resource not found: There is no pet with id 999"
        );
    }

    #[tokio::test]
    async fn test_invalid_credentials_response() {
        let (status, body) =
            body_json(AppError::InvalidCredentials("bad login".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid resource: bad login");
    }

    #[tokio::test]
    async fn test_validation_response_is_field_map() {
        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), "too short".to_string());
        let (status, body) = body_json(AppError::Validation(fields)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "name": "too short" }));
    }

    #[tokio::test]
    async fn test_invalid_field_response() {
        let (status, body) = body_json(AppError::invalid_field("name", "too short")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "name": "too short" }));
    }

    #[tokio::test]
    async fn test_internal_hides_detail() {
        let (status, body) = body_json(AppError::internal("lock poisoned")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "An internal error occurred");
    }

    #[test]
    fn test_option_ext() {
        let missing: Option<i32> = None;
        let err = missing
            .ok_or_not_found(|| "There is no order with id 7".to_string())
            .unwrap_err();
        assert_eq!(err, AppError::not_found("There is no order with id 7"));
        assert_eq!(Some(3).ok_or_not_found(String::new).unwrap(), 3);
    }
}
