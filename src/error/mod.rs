//! Error handling module.
//!
//! [`LuhnError`] covers malformed input to the checksum engine; [`AppError`]
//! is what handlers return and maps to HTTP status codes and the standard
//! API error envelope.

pub mod codes;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

pub use codes::ErrorCode;

use crate::service::luhn::MAX_LENGTH;

/// Errors raised by the Luhn engine for malformed input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LuhnError {
    /// Nothing left after stripping separators.
    #[error("no digits in input")]
    EmptyInput,

    /// Input contains a character other than a digit, space or hyphen.
    #[error("invalid character '{0}' in input")]
    NonDigitInput(char),

    /// Generator prefix is empty.
    #[error("prefix cannot be empty")]
    EmptyPrefix,

    /// Generator prefix contains a non-digit.
    #[error("invalid character '{0}' in prefix")]
    NonDigitPrefix(char),

    /// Target length cannot hold the prefix plus a check digit.
    #[error(
        "length {length} must exceed prefix length {prefix_len} and be at most {max}",
        max = MAX_LENGTH
    )]
    InvalidLength {
        /// Requested total length.
        length: usize,
        /// Length of the prefix.
        prefix_len: usize,
    },
}

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Required parameter absent or blank.
    #[error("Missing parameter: {0}")]
    MissingParam(&'static str),

    /// Generation count outside `1..=max`.
    #[error("count must be between 1 and {max}, got {count}")]
    CountOutOfRange {
        /// Requested count.
        count: u32,
        /// Configured maximum.
        max: u32,
    },

    /// No profile registered under the requested name.
    #[error("Unknown card type: {0}")]
    UnknownCardType(String),

    /// Card profile is malformed.
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// Malformed input for the checksum engine.
    #[error(transparent)]
    Luhn(#[from] LuhnError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingParam(_) => ErrorCode::MISSING_PARAM,
            Self::CountOutOfRange { .. } => ErrorCode::COUNT_OUT_OF_RANGE,
            Self::UnknownCardType(_) => ErrorCode::UNKNOWN_CARD_TYPE,
            Self::InvalidProfile(_) => ErrorCode::INVALID_PROFILE,
            Self::Luhn(LuhnError::EmptyInput | LuhnError::NonDigitInput(_)) => {
                ErrorCode::INVALID_DIGITS
            }
            Self::Luhn(_) => ErrorCode::INVALID_LAYOUT,
            Self::Internal(_) => ErrorCode::INTERNAL_ERROR,
        }
    }

    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownCardType(_) => StatusCode::NOT_FOUND,
            Self::MissingParam(_)
            | Self::CountOutOfRange { .. }
            | Self::InvalidProfile(_)
            | Self::Luhn(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code().as_i32();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(error_code = code, status = %status, message = %message, "Request failed");
        } else {
            tracing::warn!(error_code = code, status = %status, message = %message, "Request rejected");
        }

        let body = Json(json!({
            "code": code,
            "message": message,
            "data": null
        }));

        (status, body).into_response()
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
