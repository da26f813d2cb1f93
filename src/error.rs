//! Application error taxonomy and HTTP response mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// JSON body returned for every error response.
///
/// `error` is a short human-readable message; `details` carries
/// machine-readable context and is omitted when empty.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    details: Value,
}

/// Unified error type for service and handler failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing input (400).
    #[error("{message}")]
    Validation { message: String, details: Value },
    /// Unknown short code (404).
    #[error("{message}")]
    NotFound { message: String, details: Value },
    /// Short code collision (409).
    #[error("{message}")]
    Conflict { message: String, details: Value },
    /// Path segment shadows a fixed route; reported to clients as 404.
    #[error("{message}")]
    ReservedPath { message: String, details: Value },
    /// Unexpected store or runtime failure (500).
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
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

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn reserved_path(message: impl Into<String>, details: Value) -> Self {
        Self::ReservedPath {
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
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: message,
                    details,
                },
            ),
            AppError::NotFound { message, details } => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: message,
                    details,
                },
            ),
            // A reserved segment is indistinguishable from an unknown code
            // from the client's point of view.
            AppError::ReservedPath { .. } => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "not found".to_string(),
                    details: Value::Null,
                },
            ),
            AppError::Conflict { message, details } => (
                StatusCode::CONFLICT,
                ErrorBody {
                    error: message,
                    details,
                },
            ),
            AppError::Internal { message, details } => {
                tracing::error!(error = %message, %details, "internal error");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "internal".to_string(),
                        details: Value::Null,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "code already exists",
                json!({ "constraint": db.constraint() }),
            );
        }

        tracing::error!(error = %e, "database error");
        AppError::internal("database error", json!({}))
    }
}
