//! HTTP-facing error type shared by handlers, services and middleware.
//!
//! Every failure surfaces to the caller as a JSON body of the form
//! `{ "statusCode": 404, "error": "not_found", "message": "Tailor not found" }`
//! with an optional `details` object.

use std::fmt::Display;

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Serialized error payload.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    #[schema(value_type = String)]
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    #[schema(value_type = Object)]
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing input, rejected before any business code runs.
    #[error("{message}")]
    Validation { message: String, details: Value },
    /// The external store or identity provider refused the operation.
    #[error("{message}")]
    BadRequest { message: String, details: Value },
    #[error("{message}")]
    Unauthorized { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::BadRequest {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Builds the `"Failed to <action>: <reason>"` bad request used for
    /// upstream failures. The upstream reason is passed through verbatim.
    pub fn failed(action: &str, reason: impl Display) -> Self {
        Self::bad_request(format!("Failed to {action}: {reason}"), Value::Null)
    }

    /// The guard's single rejection outcome.
    pub fn unauthenticated() -> Self {
        Self::unauthorized("Unauthorized", Value::Null)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::BadRequest { .. } => "bad_request",
            AppError::Unauthorized { .. } => "unauthorized",
            AppError::NotFound { .. } => "not_found",
            AppError::Internal { .. } => "internal_error",
        }
    }

    /// Converts the error into its serializable body.
    pub fn to_error_body(&self) -> ErrorBody {
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::BadRequest { message, details }
            | AppError::Unauthorized { message, details }
            | AppError::NotFound { message, details }
            | AppError::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorBody {
            status_code: self.status_code().as_u16(),
            error: self.code(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = self.to_error_body();

        let mut response = (status, Json(body)).into_response();

        // RFC 6750
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::validation("Validation failed", details)
    }
}
