use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Error as SqlxError;
use std::time::Duration;
use tracing::info;

use crate::probe::{ProbeError, QueryExecutor, PROBE_QUERY};

/// Database connection pool
pub struct DbPool {
    pool: PgPool,
}

impl DbPool {
    /// Create a lazily-connecting database connection pool
    ///
    /// No connection is opened here; the first query does that. A database
    /// that is down at startup therefore shows up in the health probe instead
    /// of stopping the server.
    ///
    /// # Arguments
    /// * `database_url` - PostgreSQL connection string
    /// * `max_connections` - Upper bound on pooled connections
    /// * `acquire_timeout` - How long a query may wait for a connection
    ///
    /// # Returns
    /// * `Result<Self, SqlxError>` - Pool, or an error if the URL is invalid
    pub fn connect_lazy(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, SqlxError> {
        info!("Creating database connection pool...");

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(0)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(Duration::from_secs(600)) // Close idle connections after 10 minutes
            .max_lifetime(Duration::from_secs(1800)) // Recycle connections after 30 minutes
            .connect_lazy(database_url)?;

        info!("Database connection pool created");

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl QueryExecutor for DbPool {
    /// Borrow one pooled connection for the probe query. The connection goes
    /// back to the pool when the query completes or its future is dropped.
    async fn select_one(&self) -> Result<Option<i64>, ProbeError> {
        let value = sqlx::query_scalar::<_, Option<i32>>(PROBE_QUERY)
            .fetch_optional(self.pool())
            .await?;
        Ok(value.flatten().map(i64::from))
    }
}
