use crate::handlers::{database_health, health_check, ready_check};
use crate::state::AppState;
use axum::{routing::get, Router};

/// Create API routes
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/database/health", get(database_health))
        .route("/ready", get(ready_check))
        .with_state(state)
}
