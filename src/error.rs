//! Error types for the dealership catalog service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

/// Terminal error kinds surfaced by the service layer
///
/// Every error ends the triggering request; there is no retry policy.
/// The `IntoResponse` impl maps each kind to its HTTP status and the
/// `{"success": false, "error", "code", "details"?}` envelope.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    Validation {
        message: String,
        details: Option<Value>,
    },

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Validation failure without field-level details
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            details: None,
        }
    }

    /// Validation failure carrying the per-field errors produced by `validator`
    pub fn validation_with(message: impl Into<String>, errors: &validator::ValidationErrors) -> Self {
        ApiError::Validation {
            message: message.into(),
            details: serde_json::to_value(errors).ok(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut body = json!({
            "success": false,
            "error": self.to_string(),
            "code": self.code(),
        });

        if let ApiError::Validation {
            details: Some(details),
            ..
        } = self
        {
            body["details"] = details;
        }

        (status, Json(body)).into_response()
    }
}
