//! Error types for dependency probing

use std::time::Duration;
use thiserror::Error;

/// Failure raised while running the probe query.
///
/// The `Display` output of each variant is what ends up after the `DOWN: `
/// marker in the response body, so driver and caller messages pass through
/// unchanged.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The database driver reported an error
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Failure reported by an executor other than the database pool
    #[allow(dead_code)]
    #[error("{0}")]
    Failed(String),

    /// The query did not finish within the probe timeout
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    /// The caller cancelled the probe before it finished
    #[error("probe cancelled")]
    Cancelled,

    /// No database URL was configured at startup
    #[error("database not configured")]
    NotConfigured,
}
