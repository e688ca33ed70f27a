use axum::{Router, http::StatusCode, middleware, response::IntoResponse, routing::get};
use metrics_exporter_prometheus::PrometheusHandle;

use crate::{
    config::Environment,
    metrics,
    middleware::{request_id::request_id_middleware, security_headers::apply_security_headers},
    user,
};

/// Assemble the application router.
///
/// The user directory lives under `/api`; `/health` and `/metrics` are
/// operational routes outside it. Every response passes through the
/// metrics, request ID and security header layers.
pub fn router(environment: Environment, metrics_handle: PrometheusHandle) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .route(
            "/metrics",
            get(metrics::metrics_handler).with_state(metrics_handle),
        )
        .nest("/api", user::routes())
        .fallback(handler_404)
        .layer(middleware::from_fn(metrics::track_metrics))
        .layer(middleware::from_fn(request_id_middleware));

    apply_security_headers(router, environment)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
