//! Error code constants.
//!
//! Error codes are organized by category:
//! - 1xxx: Profile / configuration errors
//! - 3xxx: Validation errors
//! - 4xxx: Resource errors
//! - 5xxx: Internal/System errors

/// Error code type with semantic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(i32);

impl ErrorCode {
    // ===== Profile Errors (1xxx) =====

    /// Card profile is malformed.
    pub const INVALID_PROFILE: Self = Self(1001);

    /// Prefix/length layout cannot produce a number.
    pub const INVALID_LAYOUT: Self = Self(1002);

    // ===== Validation Errors (3xxx) =====

    /// Missing required parameter.
    pub const MISSING_PARAM: Self = Self(3002);

    /// Requested count outside the allowed range.
    pub const COUNT_OUT_OF_RANGE: Self = Self(3003);

    /// Partial number is not a digit string.
    pub const INVALID_DIGITS: Self = Self(3004);

    // ===== Resource Errors (4xxx) =====

    /// Unknown card type.
    pub const UNKNOWN_CARD_TYPE: Self = Self(4003);

    // ===== Internal/System Errors (5xxx) =====

    /// Internal server error.
    pub const INTERNAL_ERROR: Self = Self(5002);

    /// Service unavailable.
    pub const SERVICE_UNAVAILABLE: Self = Self(5003);

    /// Get the error code as an i32.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Get the category of this error code.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self.0 {
            1000..=1999 => ErrorCategory::Profile,
            3000..=3999 => ErrorCategory::Validation,
            4000..=4999 => ErrorCategory::Resource,
            5000..=5999 => ErrorCategory::Internal,
            _ => ErrorCategory::Unknown,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

/// Error category based on error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Card profile and layout errors (1xxx).
    Profile,
    /// Request validation errors (3xxx).
    Validation,
    /// Resource errors (4xxx).
    Resource,
    /// Internal/system errors (5xxx).
    Internal,
    /// Unknown category.
    Unknown,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Profile => write!(f, "profile"),
            Self::Validation => write!(f, "validation"),
            Self::Resource => write!(f, "resource"),
            Self::Internal => write!(f, "internal"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::INVALID_PROFILE.as_i32(), 1001);
        assert_eq!(ErrorCode::MISSING_PARAM.as_i32(), 3002);
        assert_eq!(ErrorCode::COUNT_OUT_OF_RANGE.as_i32(), 3003);
        assert_eq!(ErrorCode::UNKNOWN_CARD_TYPE.as_i32(), 4003);
        assert_eq!(ErrorCode::INTERNAL_ERROR.as_i32(), 5002);
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(ErrorCode::INVALID_LAYOUT.category(), ErrorCategory::Profile);
        assert_eq!(
            ErrorCode::INVALID_DIGITS.category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            ErrorCode::UNKNOWN_CARD_TYPE.category(),
            ErrorCategory::Resource
        );
        assert_eq!(
            ErrorCode::SERVICE_UNAVAILABLE.category(),
            ErrorCategory::Internal
        );
        assert_eq!(ErrorCategory::Validation.to_string(), "validation");
    }
}
