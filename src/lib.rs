//! # Cardgen Worker
//!
//! A small HTTP service wrapping a Luhn (mod-10) checksum engine:
//!
//! - **Validation**: check whether a card number passes the Luhn checksum
//! - **Generation**: produce valid test numbers for a card type profile
//!   (prefix + length) or an ad-hoc prefix
//! - **Check digits**: complete a partial number
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      Worker Service                      │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐  ┌──────────────┐  ┌─────────────────┐  │
//! │  │  API Layer  │  │ CardService  │  │  Luhn engine    │  │
//! │  │  (Axum)     │→ │ + profiles   │→ │  (pure fns)     │  │
//! │  └─────────────┘  └──────────────┘  └─────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod telemetry;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::api::create_router;
use crate::api::state::AppState;
use crate::config::AppConfig;

/// Run the card worker service.
///
/// This function:
/// 1. Loads `.env`, then configuration from files and environment
/// 2. Initializes logging and the metrics recorder
/// 3. Builds the profile registry and services
/// 4. Starts the HTTP server
/// 5. Handles graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded
/// - A configured card profile is invalid
/// - HTTP server fails to bind
pub async fn run() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    telemetry::init_logging(&config.observability);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Cardgen Worker"
    );

    let metrics = if config.observability.metrics_enabled {
        telemetry::prometheus_handle()
    } else {
        None
    };

    let state = AppState::new(Arc::new(config.clone()), metrics)?;
    info!(profiles = state.profiles.len(), "Card profiles loaded");

    let app = create_router(state);

    let addr = SocketAddr::new(config.server.host, config.server.port);
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
