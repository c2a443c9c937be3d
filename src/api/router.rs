//! Router setup and configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{card, health};
use crate::api::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    // Health and metrics routes
    let mut health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready));

    if state.config.observability.metrics_enabled {
        health_routes = health_routes.route(
            &state.config.observability.metrics_path,
            get(health::metrics),
        );
    }

    // Card number routes
    let card_routes = Router::new()
        .route("/validate", get(card::validate).post(card::validate_batch))
        .route("/generate", get(card::generate))
        .route("/generate/custom", get(card::generate_custom))
        .route("/check-digit", get(card::check_digit))
        .route("/profiles", get(card::list_profiles));

    // Browser tools call these endpoints cross-origin.
    Router::new()
        .merge(health_routes)
        .nest("/v1/card", card_routes)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::AppConfig;

    fn app() -> Router {
        let state = AppState::new(Arc::new(AppConfig::default()), None).unwrap();
        create_router(state)
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validate_route() {
        let (status, body) = get_json("/v1/card/validate?number=49927398716").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["valid"], true);
    }

    #[tokio::test]
    async fn test_generate_route_rejects_zero_count() {
        let (status, body) = get_json("/v1/card/generate?type=visa&count=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 3003);
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_request_id_is_propagated() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_metrics_route_without_recorder() {
        let (status, body) = get_json("/metrics").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], 5002);
    }

    #[tokio::test]
    async fn test_missing_params_report_missing_param_code() {
        let (status, body) = get_json("/v1/card/generate").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 3002);

        let (status, body) = get_json("/v1/card/generate/custom?prefix=4").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 3002);
    }
}
