use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    telemetry: &'static str,
    backend: &'static str,
    version: &'static str,
    timestamp: DateTime<Utc>,
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let telemetry_status = match state.telemetry.health().await {
        Ok(()) => "up",
        Err(e) => {
            tracing::error!("Health check failed: telemetry store unreachable: {}", e);
            "down"
        }
    };

    let status = if telemetry_status == "up" {
        "healthy"
    } else {
        "unhealthy"
    };

    let response = HealthResponse {
        status,
        telemetry: telemetry_status,
        backend: state.config.telemetry_backend.as_str(),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
    };

    let code = if status == "healthy" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(response))
}
