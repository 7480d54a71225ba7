//! REST API error types
//!
//! Every handler-level failure is converted here into the uniform response
//! envelope with the appropriate HTTP status code; nothing propagates to
//! the transport layer as a raw error.

use poll_core::{ErrorLocation, Violation};
use poll_db::DbError;

use std::panic::Location;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Uniform rejection message for over-quota clients.
pub const RATE_LIMIT_MESSAGE: &str =
    "Too many requests from this IP, please try again later.";

/// When enabled, 500 envelopes carry the underlying error detail.
/// Production keeps it off; the server turns it on for development.
static DIAGNOSTICS: AtomicBool = AtomicBool::new(false);

pub fn set_diagnostics(enabled: bool) {
    DIAGNOSTICS.store(enabled, Ordering::Relaxed);
}

fn diagnostics_enabled() -> bool {
    DIAGNOSTICS.load(Ordering::Relaxed)
}

/// JSON error envelope: `success` is always false, `errors` lists field
/// violations for validation failures, `error` carries diagnostic detail in
/// development mode only.
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Violation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Well-formed id, but no such record (404)
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Malformed or out-of-range input (400); lists every violated field
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        errors: Vec<Violation>,
        location: ErrorLocation,
    },

    /// Identifier not well-formed for the storage backend (400)
    #[error("Invalid identifier: {message} {location}")]
    InvalidIdentifier {
        message: String,
        location: ErrorLocation,
    },

    /// Client exceeded its request quota (429)
    #[error("Rate limit exceeded {location}")]
    RateLimited { location: ErrorLocation },

    /// Unexpected storage failure (500); detail stays server-side unless
    /// diagnostics are on
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        detail: Option<String>,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, errors: Vec<Violation>) -> Self {
        ApiError::Validation {
            message: message.into(),
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        ApiError::InvalidIdentifier {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rate_limited() -> Self {
        ApiError::RateLimited {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>, detail: Option<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
            detail,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log with location before the location is discarded
        log::error!("{}", self);

        let (status, message, errors, detail) = match self {
            ApiError::NotFound { message, .. } => (StatusCode::NOT_FOUND, message, None, None),
            ApiError::Validation {
                message, errors, ..
            } => (StatusCode::BAD_REQUEST, message, Some(errors), None),
            ApiError::InvalidIdentifier { message, .. } => {
                (StatusCode::BAD_REQUEST, message, None, None)
            }
            ApiError::RateLimited { .. } => (
                StatusCode::TOO_MANY_REQUESTS,
                String::from(RATE_LIMIT_MESSAGE),
                None,
                None,
            ),
            ApiError::Internal {
                message, detail, ..
            } => (StatusCode::INTERNAL_SERVER_ERROR, message, None, detail),
        };

        let error = if diagnostics_enabled() { detail } else { None };

        (
            status,
            Json(ApiErrorResponse {
                success: false,
                message,
                errors,
                error,
            }),
        )
            .into_response()
    }
}

/// Convert UUID parse failures into the invalid-identifier rejection
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(_: uuid::Error) -> Self {
        ApiError::invalid_identifier("Invalid poll ID")
    }
}

/// Convert domain validation failures into the 400 envelope
impl From<poll_core::CoreError> for ApiError {
    #[track_caller]
    fn from(e: poll_core::CoreError) -> Self {
        match e {
            poll_core::CoreError::Validation { violations, .. } => ApiError::Validation {
                message: String::from("Validation failed"),
                errors: violations,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert store errors, hiding database detail from clients
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::PollNotFound { .. } => ApiError::NotFound {
                message: String::from("Poll not found"),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::OptionOutOfRange { index, .. } => ApiError::Validation {
                message: String::from("Invalid option index"),
                errors: vec![Violation::new(
                    "optionIndex",
                    format!("Option index {} is out of range", index),
                )],
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::MalformedPoll { violations, .. } => ApiError::Validation {
                message: String::from("Validation failed"),
                errors: violations,
                location: ErrorLocation::from(Location::caller()),
            },
            other => ApiError::Internal {
                message: String::from("Internal server error"),
                detail: Some(other.to_string()),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert malformed request bodies into the validation envelope rather
/// than axum's plain-text rejection
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            message: String::from("Validation failed"),
            errors: vec![Violation::new("body", rejection.body_text())],
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
