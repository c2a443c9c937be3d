//! Card number and card type profile types.

use serde::{Deserialize, Serialize};

use crate::error::LuhnError;
use crate::service::luhn::MAX_LENGTH;

/// Characters stripped from user input before checksum validation.
const SEPARATORS: [char; 2] = [' ', '-'];

/// A non-empty string of ASCII decimal digits.
///
/// Built from user input by stripping spaces and hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitString(String);

impl DigitString {
    /// Normalize `input` into a digit string.
    ///
    /// # Errors
    ///
    /// Returns [`LuhnError::NonDigitInput`] on the first character that is not
    /// a digit or separator, and [`LuhnError::EmptyInput`] if no digits remain.
    pub fn parse(input: &str) -> Result<Self, LuhnError> {
        let mut digits = String::with_capacity(input.len());
        for c in input.chars().filter(|c| !SEPARATORS.contains(c)) {
            if !c.is_ascii_digit() {
                return Err(LuhnError::NonDigitInput(c));
            }
            digits.push(c);
        }

        if digits.is_empty() {
            return Err(LuhnError::EmptyInput);
        }

        Ok(Self(digits))
    }

    /// The normalized digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no digits. Never true for a parsed value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Digit values, most significant first.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = u32> + '_ {
        self.0.bytes().map(|b| u32::from(b - b'0'))
    }

    /// Consume into the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for DigitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static description of a card brand used to seed generated numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardProfile {
    /// Brand name, lowercase (e.g. `visa`).
    pub name: String,

    /// Leading digits every number of this brand starts with.
    pub prefix: String,

    /// Total number of digits including the check digit.
    pub length: usize,
}

impl CardProfile {
    /// Create a profile.
    pub fn new(name: impl Into<String>, prefix: impl Into<String>, length: usize) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            length,
        }
    }

    /// Validate the profile.
    ///
    /// # Errors
    ///
    /// Returns a description of the first violated constraint.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("name cannot be empty".to_string());
        }
        if self.name.chars().any(|c| c.is_ascii_uppercase() || c.is_whitespace()) {
            return Err(format!(
                "name '{}' must be lowercase without whitespace",
                self.name
            ));
        }
        if self.prefix.is_empty() {
            return Err(format!("{}: prefix cannot be empty", self.name));
        }
        if !self.prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("{}: prefix must contain only digits", self.name));
        }
        if self.length <= self.prefix.len() || self.length > MAX_LENGTH {
            return Err(format!(
                "{}: length must exceed prefix length {} and be at most {MAX_LENGTH}",
                self.name,
                self.prefix.len()
            ));
        }
        Ok(())
    }

    /// Whether `digits` starts with this profile's prefix.
    #[must_use]
    pub fn matches(&self, digits: &DigitString) -> bool {
        digits.as_str().starts_with(&self.prefix)
    }
}
