//! Core types and traits for dependency probing

use async_trait::async_trait;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::ProbeError;

/// The fixed round-trip query every executor runs.
pub const PROBE_QUERY: &str = "SELECT 1";

/// The value a healthy dependency returns for [`PROBE_QUERY`].
pub const SENTINEL: i64 = 1;

/// Marker placed in front of the diagnostic of an unreachable dependency.
pub const DOWN_PREFIX: &str = "DOWN: ";

/// Capability to run [`PROBE_QUERY`] against a dependency.
///
/// `Ok(None)` means the query ran but produced no row or a NULL value.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn select_one(&self) -> Result<Option<i64>, ProbeError>;
}

/// Outcome of a single probe invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    /// The dependency answered with the sentinel value
    Healthy,
    /// The query ran but answered with something else, or nothing
    Unexpected(Option<i64>),
    /// The query could not be executed
    Unreachable(String),
}

impl ProbeResult {
    /// Classify what the executor returned.
    pub fn classify(outcome: Result<Option<i64>, ProbeError>) -> Self {
        match outcome {
            Ok(Some(SENTINEL)) => ProbeResult::Healthy,
            Ok(value) => ProbeResult::Unexpected(value),
            Err(e) => ProbeResult::Unreachable(e.to_string()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ProbeResult::Healthy => StatusCode::OK,
            ProbeResult::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProbeResult::Unreachable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Short label used as the `status` of JSON readiness responses.
    pub fn label(&self) -> &'static str {
        match self {
            ProbeResult::Healthy => "UP",
            ProbeResult::Unexpected(_) => "UNEXPECTED_RESULT",
            ProbeResult::Unreachable(_) => "DOWN",
        }
    }

    /// Plain-text body for the database health endpoint.
    pub fn body(&self) -> String {
        match self {
            ProbeResult::Unreachable(message) => format!("{DOWN_PREFIX}{message}"),
            other => other.label().to_string(),
        }
    }
}

impl IntoResponse for ProbeResult {
    fn into_response(self) -> Response {
        (self.status_code(), self.body()).into_response()
    }
}
