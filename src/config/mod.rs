//! Configuration management module.
//!
//! Supports loading configuration from:
//! - TOML files (config/default.toml, config/{profile}.toml)
//! - Environment variables with `CARDGEN_WORKER__<SECTION>__<KEY>` pattern

mod generator;
mod server;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use generator::GeneratorConfig;
pub use server::ServerConfig;

/// Paths served by the router itself; the metrics endpoint cannot reuse them.
const RESERVED_PATHS: [&str; 2] = ["/health", "/ready"];

/// Prefix nesting the card API routes.
const CARD_API_PREFIX: &str = "/v1/card";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Card number generation configuration.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{CARDGEN_PROFILE}.toml` (if `CARDGEN_PROFILE` is set)
    /// 3. Environment variables with `CARDGEN_WORKER__` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let profile =
            std::env::var("CARDGEN_PROFILE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{profile}")).required(false))
            // CARDGEN_WORKER__SERVER__PORT=8080 -> server.port = 8080
            .add_source(
                Environment::with_prefix("CARDGEN_WORKER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint as a [`ConfigError::Message`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("server.port cannot be 0".to_string()));
        }

        self.generator.validate()?;

        if !matches!(self.observability.log_format.as_str(), "text" | "json") {
            return Err(ConfigError::Message(format!(
                "observability.log_format must be \"text\" or \"json\", got \"{}\"",
                self.observability.log_format
            )));
        }
        let metrics_path = self.observability.metrics_path.as_str();
        if !metrics_path.starts_with('/') {
            return Err(ConfigError::Message(
                "observability.metrics_path must start with '/'".to_string(),
            ));
        }
        if metrics_path.contains(['{', '}']) {
            return Err(ConfigError::Message(
                "observability.metrics_path cannot contain route parameters".to_string(),
            ));
        }
        if RESERVED_PATHS.contains(&metrics_path) || metrics_path.starts_with(CARD_API_PREFIX) {
            return Err(ConfigError::Message(format!(
                "observability.metrics_path \"{metrics_path}\" collides with an API route"
            )));
        }

        Ok(())
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Enable Prometheus metrics endpoint.
    #[serde(default = "default_metrics_enabled")]
    pub metrics_enabled: bool,

    /// Metrics endpoint path.
    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

const fn default_metrics_enabled() -> bool {
    true
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            metrics_enabled: true,
            metrics_path: default_metrics_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.generator.max_count, 100);
        assert_eq!(config.generator.default_count, 1);
        assert!(config.generator.profiles.is_empty());
        assert_eq!(config.observability.metrics_path, "/metrics");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.observability.log_format = "xml".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.observability.metrics_path = "metrics".to_string();
        assert!(config.validate().is_err());

        for path in ["/health", "/ready", "/v1/card", "/v1/card/validate", "/{name}"] {
            let mut config = AppConfig::default();
            config.observability.metrics_path = path.to_string();
            assert!(config.validate().is_err(), "{path}");
        }

        let mut config = AppConfig::default();
        config.observability.metrics_path = "/internal/metrics".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_from_toml() {
        let config: AppConfig = Config::builder()
            .add_source(File::from_str(
                r#"
                [server]
                port = 9090

                [generator]
                max_count = 50

                [[generator.profiles]]
                name = "maestro"
                prefix = "6759"
                length = 19
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.generator.max_count, 50);
        assert_eq!(config.generator.default_count, 1);
        assert_eq!(config.generator.profiles[0].prefix, "6759");
        assert_eq!(config.observability.log_level, "info");
        assert!(config.validate().is_ok());
    }
}
