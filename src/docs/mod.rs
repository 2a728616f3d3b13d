use utoipa::OpenApi;
use crate::models::*;

/// Root endpoint
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service greeting", body = String, content_type = "text/plain")
    )
)]
#[allow(dead_code)]
pub async fn root_doc() {}

/// Liveness check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Process is running", body = String, content_type = "text/plain")
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// Database health endpoint
#[utoipa::path(
    get,
    path = "/api/database/health",
    responses(
        (status = 200, description = "Database answered `SELECT 1` (body `UP`)", body = String, content_type = "text/plain"),
        (status = 500, description = "Database answered with another value (body `UNEXPECTED_RESULT`)", body = String, content_type = "text/plain"),
        (status = 503, description = "Database unreachable (body `DOWN: <reason>`)", body = String, content_type = "text/plain")
    )
)]
#[allow(dead_code)]
pub async fn database_health_doc() {}

/// Readiness check endpoint
#[utoipa::path(
    get,
    path = "/api/ready",
    responses(
        (status = 200, description = "Service is ready", body = ReadyResponse),
        (status = 500, description = "Database returned an unexpected value", body = ReadyResponse),
        (status = 503, description = "Database unreachable", body = ReadyResponse)
    )
)]
#[allow(dead_code)]
pub async fn ready_check_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        root_doc,
        health_check_doc,
        database_health_doc,
        ready_check_doc,
    ),
    components(
        schemas(ReadyResponse)
    ),
    tags(
        (name = "health", description = "Liveness and dependency health endpoints")
    )
)]
pub struct ApiDoc;
