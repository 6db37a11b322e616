// ABOUTME: Application error types with machine-readable codes
// ABOUTME: Converts domain failures into structured JSON HTTP responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Convenience alias for results carrying [`AppError`]
pub type AppResult<T> = Result<T, AppError>;

/// Machine-readable error codes exposed in API responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Authentication token missing
    AuthRequired,
    /// Authentication token invalid or expired
    AuthInvalid,
    /// Authenticated but not allowed to perform the operation
    PermissionDenied,
    /// Request payload malformed or semantically invalid
    InvalidInput,
    /// One or more wizard fields failed validation
    ValidationFailed,
    /// Requested resource does not exist
    ResourceNotFound,
    /// Resource already exists or state precondition failed
    Conflict,
    /// Database operation failed
    DatabaseError,
    /// Unexpected internal failure
    InternalError,
}

impl ErrorCode {
    /// HTTP status code this error code maps to
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::AuthRequired => StatusCode::UNAUTHORIZED,
            Self::AuthInvalid => StatusCode::UNAUTHORIZED,
            Self::PermissionDenied => StatusCode::FORBIDDEN,
            Self::InvalidInput | Self::ValidationFailed => StatusCode::BAD_REQUEST,
            Self::ResourceNotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::DatabaseError | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Application error carrying a code, a message, and optional field errors
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable description
    pub message: String,
    /// Per-field validation messages, present for `ValidationFailed`
    pub fields: BTreeMap<String, String>,
}

impl AppError {
    /// Create an error with an explicit code
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Database operation failure
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Resource lookup miss
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Malformed or semantically invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// State precondition or uniqueness violation
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Missing authentication
    pub fn auth_required(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthRequired, message)
    }

    /// Invalid or expired authentication
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthInvalid, message)
    }

    /// Authenticated but not permitted
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PermissionDenied, message)
    }

    /// Unexpected internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Per-field validation failure
    #[must_use]
    pub fn validation(fields: BTreeMap<String, String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: "Validation failed".into(),
            fields,
        }
    }
}

/// JSON body returned for every error response
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    fields: BTreeMap<String, String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.code.status();
        let body = ErrorBody {
            error: self.code,
            message: self.message,
            fields: self.fields,
        };
        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        Self::database(format!("Database operation failed: {e}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        Self::internal(format!("Serialization failed: {e}"))
    }
}
