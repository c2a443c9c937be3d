//! Health check handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

use crate::api::state::AppState;
use crate::error::{AppError, ErrorCode, Result};

/// Liveness check - always returns 200 if the service is running.
pub async fn health() -> Json<Value> {
    Json(json!({
        "code": 0,
        "message": "success",
        "data": {
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION")
        }
    }))
}

/// Readiness check - ready once at least one card profile is loaded.
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let profiles_ok = !state.profiles.is_empty();

    let status_code = if profiles_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = Json(json!({
        "code": if profiles_ok { 0 } else { ErrorCode::SERVICE_UNAVAILABLE.as_i32() },
        "message": if profiles_ok { "success" } else { "service unavailable" },
        "data": {
            "ready": profiles_ok,
            "components": {
                "profiles": profiles_ok
            }
        }
    }));

    (status_code, response)
}

/// Prometheus metrics endpoint.
pub async fn metrics(State(state): State<AppState>) -> Result<String> {
    state
        .metrics
        .as_ref()
        .map(metrics_exporter_prometheus::PrometheusHandle::render)
        .ok_or_else(|| AppError::Internal("metrics recorder not installed".to_string()))
}
