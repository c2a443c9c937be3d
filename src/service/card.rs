//! Card number service.
//!
//! Combines the profile registry with the Luhn engine and serves the
//! validator and generator call sites.

use std::sync::Arc;

use metrics::counter;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::domain::{
    CheckDigitResponse, DigitString, GenerateResponse, ProfileListResponse, ValidationResponse,
};
use crate::error::{AppError, Result};
use crate::service::luhn;
use crate::service::profile::ProfileRegistry;

/// Service for card number validation and generation.
pub struct CardService {
    /// Card type profiles.
    registry: Arc<ProfileRegistry>,
    /// Largest batch a single request may ask for.
    max_count: u32,
}

impl CardService {
    /// Create a new card service.
    pub fn new(registry: Arc<ProfileRegistry>, config: &GeneratorConfig) -> Self {
        Self {
            registry,
            max_count: config.max_count,
        }
    }

    /// Upper bound on `count` for generation and batch validation.
    #[must_use]
    pub const fn max_count(&self) -> u32 {
        self.max_count
    }

    /// Check a user-supplied card number.
    ///
    /// Malformed input is reported as an invalid number rather than an error.
    pub fn validate(&self, input: &str) -> ValidationResponse {
        let response = match DigitString::parse(input) {
            Ok(digits) => {
                let valid = luhn::is_valid_digits(&digits);
                let brand = self.registry.detect(&digits).map(|p| p.name.clone());
                ValidationResponse {
                    valid,
                    length: digits.len(),
                    digits: Some(digits.into_string()),
                    brand,
                }
            }
            Err(err) => {
                debug!(error = %err, "Malformed card number");
                ValidationResponse::malformed()
            }
        };

        let result = if response.valid { "valid" } else { "invalid" };
        counter!("cardgen_validations_total", "result" => result).increment(1);
        response
    }

    /// Generate `count` numbers for the named card type.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is out of range or the type is unknown.
    pub fn generate(&self, card_type: &str, count: u32) -> Result<GenerateResponse> {
        self.check_count(count)?;

        let profile = self
            .registry
            .get(card_type)
            .ok_or_else(|| AppError::UnknownCardType(card_type.to_string()))?;

        let numbers = luhn::generate_batch(
            &profile.prefix,
            profile.length,
            count as usize,
            &mut rand::rng(),
        )?;

        debug!(card_type = %profile.name, count, "Generated card numbers");
        counter!("cardgen_generated_total", "type" => profile.name.clone())
            .increment(u64::from(count));

        Ok(GenerateResponse {
            card_type: Some(profile.name.clone()),
            numbers,
        })
    }

    /// Generate `count` numbers from an ad-hoc prefix and length.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is out of range or the layout is invalid.
    pub fn generate_custom(
        &self,
        prefix: &str,
        length: usize,
        count: u32,
    ) -> Result<GenerateResponse> {
        self.check_count(count)?;

        let numbers = luhn::generate_batch(prefix, length, count as usize, &mut rand::rng())?;

        debug!(prefix, length, count, "Generated custom card numbers");
        counter!("cardgen_generated_total", "type" => "custom").increment(u64::from(count));

        Ok(GenerateResponse {
            card_type: None,
            numbers,
        })
    }

    /// Compute the check digit completing `partial`.
    ///
    /// # Errors
    ///
    /// Returns an error if `partial` is not a digit string.
    pub fn check_digit(&self, partial: &str) -> Result<CheckDigitResponse> {
        let digits = DigitString::parse(partial)?;
        let check_digit = luhn::check_digit_of(&digits);
        counter!("cardgen_check_digits_total").increment(1);

        Ok(CheckDigitResponse {
            check_digit,
            number: format!("{digits}{check_digit}"),
        })
    }

    /// All registered profiles.
    #[must_use]
    pub fn profiles(&self) -> ProfileListResponse {
        ProfileListResponse {
            profiles: self.registry.iter().cloned().collect(),
        }
    }

    /// Reject counts outside `1..=max_count`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CountOutOfRange`] when the count is rejected.
    pub fn check_count(&self, count: u32) -> Result<()> {
        if count == 0 || count > self.max_count {
            return Err(AppError::CountOutOfRange {
                count,
                max: self.max_count,
            });
        }
        Ok(())
    }
}
