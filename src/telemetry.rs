//! Logging and metrics setup.

use std::sync::OnceLock;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::warn;

use crate::config::ObservabilityConfig;

static PROMETHEUS: OnceLock<Option<PrometheusHandle>> = OnceLock::new();

/// Initialize logging based on configuration.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &ObservabilityConfig) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.log_format == "json" {
        subscriber.with(fmt::layer().json()).init();
    } else {
        subscriber.with(fmt::layer()).init();
    }
}

/// Install the process-wide Prometheus recorder and return its handle.
///
/// Safe to call more than once; only the first call installs. Returns `None`
/// if another recorder was already installed by someone else.
pub fn prometheus_handle() -> Option<PrometheusHandle> {
    PROMETHEUS
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => {
                metrics::gauge!("cardgen_up").set(1.0);
                Some(handle)
            }
            Err(err) => {
                warn!(error = %err, "Failed to install Prometheus recorder");
                None
            }
        })
        .clone()
}
