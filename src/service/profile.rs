//! Card type profile registry.
//!
//! Holds the built-in brand profiles plus any declared in configuration.
//! The registry is immutable once built.

use std::collections::BTreeMap;

use crate::domain::{CardProfile, DigitString};
use crate::error::{AppError, Result};

/// Built-in profiles as `(name, prefix, length)`.
const BUILTIN_PROFILES: &[(&str, &str, usize)] = &[
    ("visa", "4", 16),
    ("mastercard", "51", 16),
    ("amex", "37", 15),
    ("discover", "6011", 16),
    ("jcb", "35", 16),
    ("dinersclub", "36", 14),
    ("unionpay", "62", 16),
];

/// Lookup table of card type profiles keyed by lowercase name.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, CardProfile>,
}

impl ProfileRegistry {
    /// Registry with only the built-in profiles.
    #[must_use]
    pub fn builtin() -> Self {
        let profiles = BUILTIN_PROFILES
            .iter()
            .map(|&(name, prefix, length)| {
                (name.to_string(), CardProfile::new(name, prefix, length))
            })
            .collect();
        Self { profiles }
    }

    /// Built-in profiles overlaid with `extra`.
    ///
    /// An extra profile with the name of a built-in one replaces it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidProfile`] if any extra profile is malformed.
    pub fn with_profiles(extra: &[CardProfile]) -> Result<Self> {
        let mut registry = Self::builtin();
        for profile in extra {
            profile.validate().map_err(AppError::InvalidProfile)?;
            if registry.profiles.contains_key(&profile.name) {
                tracing::info!(name = %profile.name, "Overriding built-in card profile");
            }
            registry
                .profiles
                .insert(profile.name.clone(), profile.clone());
        }
        Ok(registry)
    }

    /// Look up a profile by name, case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardProfile> {
        self.profiles.get(&name.trim().to_ascii_lowercase())
    }

    /// All profiles, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = &CardProfile> {
        self.profiles.values()
    }

    /// Number of registered profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the registry has no profiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// The profile with the longest prefix matching `digits`, if any.
    #[must_use]
    pub fn detect(&self, digits: &DigitString) -> Option<&CardProfile> {
        self.profiles
            .values()
            .filter(|profile| profile.matches(digits))
            .max_by_key(|profile| profile.prefix.len())
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
