//! Dependency health probing
//!
//! A [`HealthProbe`] runs the trivial [`PROBE_QUERY`] through an injected
//! [`QueryExecutor`] and folds every possible outcome into a [`ProbeResult`].
//! Nothing escapes as an error: driver failures, timeouts and cancellation all
//! become `ProbeResult::Unreachable`.
//!
//! ## Types
//!
//! - [`HealthProbe`]: bounded, stateless probe runner
//! - [`QueryExecutor`]: the capability the probe is handed
//! - [`ProbeResult`]: the tri-state outcome, renderable as an HTTP response
//! - [`ProbeError`]: executor failure kinds

pub mod error;
pub mod types;

pub use error::ProbeError;
pub use types::{ProbeResult, QueryExecutor, PROBE_QUERY};

use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Default upper bound for a single probe query
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Runs the probe query with a timeout and classifies the outcome.
///
/// Holds no state between invocations, so one instance can serve any number
/// of concurrent checks.
#[derive(Debug, Clone, Copy)]
pub struct HealthProbe {
    timeout: Duration,
}

impl HealthProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Check the dependency behind `executor`, bounded by the probe timeout.
    pub async fn check_dependency(&self, executor: &dyn QueryExecutor) -> ProbeResult {
        self.check_dependency_until(executor, std::future::pending::<()>())
            .await
    }

    /// Like [`HealthProbe::check_dependency`], but gives up as soon as
    /// `cancel` resolves.
    ///
    /// Dropping the in-flight query hands its pooled connection back, so no
    /// exit path leaks the resource.
    pub async fn check_dependency_until<F>(
        &self,
        executor: &dyn QueryExecutor,
        cancel: F,
    ) -> ProbeResult
    where
        F: Future<Output = ()>,
    {
        let outcome = tokio::select! {
            res = tokio::time::timeout(self.timeout, executor.select_one()) => {
                res.unwrap_or(Err(ProbeError::Timeout(self.timeout)))
            }
            _ = cancel => Err(ProbeError::Cancelled),
        };

        let result = ProbeResult::classify(outcome);
        match &result {
            ProbeResult::Healthy => debug!("Dependency probe succeeded"),
            ProbeResult::Unexpected(value) => {
                warn!("Dependency probe returned unexpected value: {:?}", value)
            }
            ProbeResult::Unreachable(message) => warn!("Dependency unreachable: {}", message),
        }
        result
    }
}

impl Default for HealthProbe {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_TIMEOUT)
    }
}
