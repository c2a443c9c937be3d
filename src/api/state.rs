//! Application state for Axum handlers.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::AppConfig;
use crate::error::Result;
use crate::service::{CardService, ProfileRegistry};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Card type profiles.
    pub profiles: Arc<ProfileRegistry>,
    /// Card validation and generation service.
    pub card_service: Arc<CardService>,
    /// Prometheus renderer, absent when metrics are disabled.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured card profile is invalid.
    pub fn new(config: Arc<AppConfig>, metrics: Option<PrometheusHandle>) -> Result<Self> {
        let profiles = Arc::new(ProfileRegistry::with_profiles(
            &config.generator.profiles,
        )?);

        let card_service = Arc::new(CardService::new(
            Arc::clone(&profiles),
            &config.generator,
        ));

        Ok(Self {
            config,
            profiles,
            card_service,
            metrics,
        })
    }
}
