//! Application state shared with handlers.

use std::sync::Arc;

use crate::probe::{HealthProbe, ProbeError, ProbeResult, QueryExecutor};

#[derive(Clone)]
pub struct AppState {
    /// Probe settings, copied into every check
    pub probe: HealthProbe,
    /// Database executor, absent when no database URL was configured
    pub executor: Option<Arc<dyn QueryExecutor>>,
}

impl AppState {
    pub fn new(probe: HealthProbe, executor: Option<Arc<dyn QueryExecutor>>) -> Self {
        Self { probe, executor }
    }

    /// Probe the database, reporting it as unreachable when not configured.
    pub async fn check_database(&self) -> ProbeResult {
        match &self.executor {
            Some(executor) => self.probe.check_dependency(executor.as_ref()).await,
            None => ProbeResult::Unreachable(ProbeError::NotConfigured.to_string()),
        }
    }
}
