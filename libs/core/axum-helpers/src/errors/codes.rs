//! Type-safe error codes for API responses.
//!
//! Each error code carries:
//! - String representation for client consumption (e.g., "NOT_FOUND")
//! - Integer code for logging and monitoring (e.g., 1004)
//! - Default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::NotFound;
//! assert_eq!(code.as_str(), "NOT_FOUND");
//! assert_eq!(code.code(), 1004);
//! assert_eq!(code.default_message(), "Resource not found");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request is malformed or carries an invalid argument
    InvalidArgument,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// Query string could not be parsed
    InvalidQuery,

    /// Requested resource was not found
    NotFound,

    /// Authentication credentials are missing or invalid
    Unauthorized,

    /// Request conflicts with current resource state (e.g., duplicate id)
    Conflict,

    // Server errors
    /// An unexpected internal server error occurred
    InternalError,

    /// Upstream service is temporarily unavailable
    ServiceUnavailable,
}

impl ErrorCode {
    /// Machine-readable identifier returned in the `error` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Conflict => "CONFLICT",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }

    /// Integer code for structured logs.
    ///
    /// 1000-1999 are client errors, 1500+ are server side.
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidArgument => 1001,
            Self::JsonExtraction => 1003,
            Self::InvalidQuery => 1002,
            Self::NotFound => 1004,
            Self::Unauthorized => 1006,
            Self::Conflict => 1008,
            Self::InternalError => 1500,
            Self::ServiceUnavailable => 1503,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "Invalid argument",
            Self::JsonExtraction => "Failed to parse request body",
            Self::InvalidQuery => "Failed to parse query string",
            Self::NotFound => "Resource not found",
            Self::Unauthorized => "Authentication required",
            Self::Conflict => "Resource already exists",
            Self::InternalError => "An internal server error occurred",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
