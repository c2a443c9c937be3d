//! Card number generation configuration.

use config::ConfigError;
use serde::Deserialize;

use crate::domain::CardProfile;

/// Hard ceiling for `max_count`.
const MAX_COUNT_LIMIT: u32 = 1000;

/// Card number generation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Largest number of cards a single request may generate or validate.
    #[serde(default = "default_max_count")]
    pub max_count: u32,

    /// Count used when a request omits it.
    #[serde(default = "default_count")]
    pub default_count: u32,

    /// Extra card profiles, overriding built-ins with the same name.
    #[serde(default)]
    pub profiles: Vec<CardProfile>,
}

const fn default_max_count() -> u32 {
    100
}

const fn default_count() -> u32 {
    1
}

impl GeneratorConfig {
    /// Validate the generator section.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_count == 0 || self.max_count > MAX_COUNT_LIMIT {
            return Err(ConfigError::Message(format!(
                "generator.max_count must be between 1 and {MAX_COUNT_LIMIT}"
            )));
        }
        if self.default_count == 0 || self.default_count > self.max_count {
            return Err(ConfigError::Message(
                "generator.default_count must be between 1 and generator.max_count".to_string(),
            ));
        }
        for profile in &self.profiles {
            profile
                .validate()
                .map_err(|e| ConfigError::Message(format!("generator.profiles: {e}")))?;
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_count: default_max_count(),
            default_count: default_count(),
            profiles: Vec::new(),
        }
    }
}
