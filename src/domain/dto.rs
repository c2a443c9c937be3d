//! Data Transfer Objects for API requests and responses.

use serde::{Deserialize, Serialize};

use super::CardProfile;

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (0 = success, non-zero = error).
    pub code: i32,

    /// Human-readable message.
    pub message: String,

    /// Response data (null on error).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success response.
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    /// Create an error response.
    pub fn error(code: i32, message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// Result of checking a single card number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Whether the number passes the Luhn checksum.
    pub valid: bool,

    /// Normalized digits, or `None` if the input was not a digit string.
    pub digits: Option<String>,

    /// Number of digits after normalization (0 when malformed).
    pub length: usize,

    /// Brand whose prefix matches the number, if any.
    pub brand: Option<String>,
}

impl ValidationResponse {
    /// Response for input that is not a digit string.
    #[must_use]
    pub const fn malformed() -> Self {
        Self {
            valid: false,
            digits: None,
            length: 0,
            brand: None,
        }
    }
}

/// Batch validation request body.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchValidateRequest {
    /// Card numbers to check.
    pub numbers: Vec<String>,
}

/// Batch validation response, in request order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchValidateResponse {
    /// One result per submitted number.
    pub results: Vec<ValidationResponse>,
}

/// Generated card numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Profile used, absent for custom prefix generation.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,

    /// Generated numbers. May contain duplicates.
    pub numbers: Vec<String>,
}

/// Check digit for a partial number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckDigitResponse {
    /// Digit to append.
    pub check_digit: u8,

    /// The partial number with the check digit appended.
    pub number: String,
}

/// Registered card profiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileListResponse {
    /// Profiles ordered by name.
    pub profiles: Vec<CardProfile>,
}
