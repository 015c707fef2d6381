use axum::{Json, extract::State, response::IntoResponse};
use std::sync::Arc;

use super::{ApiError, AppState, HealthDto};

pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthDto>, ApiError> {
    state
        .store()
        .ping()
        .await
        .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

    Ok(Json(HealthDto {
        status: "ok",
        uptime_seconds: state.start_time.elapsed().as_secs(),
    }))
}

pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.prometheus_handle.as_ref().map_or_else(
        || "Metrics not enabled or failed to initialize".to_string(),
        metrics_exporter_prometheus::PrometheusHandle::render,
    )
}
