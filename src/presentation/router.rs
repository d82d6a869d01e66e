// Route table for the hub's HTTP API
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_sensor_status, get_sensors, health_check, submit_reading};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/api/sensors", get(get_sensors).post(submit_reading))
        .route("/api/sensors/status", get(get_sensor_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
