use axum::{extract::State, http::StatusCode, Json};
use std::time::Instant;
use tracing::debug;

use crate::models::ReadyResponse;
use crate::probe::ProbeResult;
use crate::state::AppState;

pub const ROOT_MESSAGE: &str = "BookMyTime API is running!";

/// Root endpoint
pub async fn root() -> &'static str {
    ROOT_MESSAGE
}

/// Liveness endpoint, never touches the database
pub async fn health_check() -> &'static str {
    debug!("Health check requested");
    "OK"
}

/// Database health endpoint
pub async fn database_health(State(state): State<AppState>) -> ProbeResult {
    debug!("Database health check requested");
    state.check_database().await
}

/// Readiness check endpoint
pub async fn ready_check(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    debug!("Readiness check requested");

    let started = Instant::now();
    let result = state.check_database().await;
    let latency_ms = started.elapsed().as_millis() as u64;

    let message = match &result {
        ProbeResult::Healthy => "Database is reachable".to_string(),
        ProbeResult::Unexpected(value) => format!("Database returned unexpected value: {:?}", value),
        ProbeResult::Unreachable(message) => message.clone(),
    };

    (
        result.status_code(),
        Json(ReadyResponse {
            status: result.label().to_string(),
            message,
            latency_ms,
        }),
    )
}
