use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API response for the readiness check
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadyResponse {
    /// One of `UP`, `UNEXPECTED_RESULT` or `DOWN`
    pub status: String,
    pub message: String,
    /// Time spent probing the database
    pub latency_ms: u64,
}
