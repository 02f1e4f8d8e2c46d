use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use loan_eligibility::scoring::{scoring_router, Classifier, ScoringService};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

pub(crate) fn with_scoring_routes<C>(service: Arc<ScoringService<C>>) -> axum::Router
where
    C: Classifier + 'static,
{
    scoring_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let listening = state.readiness.load(Ordering::Relaxed);

    let (status, label) = match (listening, state.scoring_ready) {
        (false, _) => (StatusCode::SERVICE_UNAVAILABLE, "initializing"),
        (true, false) => (StatusCode::SERVICE_UNAVAILABLE, "degraded"),
        (true, true) => (StatusCode::OK, "ready"),
    };

    (
        status,
        Json(json!({ "status": label, "scoring": state.scoring_ready })),
    )
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
