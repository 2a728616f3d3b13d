mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod probe;
mod routes;
mod shutdown;
mod state;

use config::Config;
use db::DbPool;
use probe::{HealthProbe, QueryExecutor};
use routes::create_app_routes;
use state::AppState;
use std::panic;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set panic hook for better error messages
    panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
    }));

    // Load configuration before tracing so LOG_LEVEL can shape the filter
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .init();

    if let Some(e) = config_error {
        error!("Failed to load configuration: {}", e);
        warn!("Using default configuration");
    }

    info!("Starting {}...", config.service_name);

    // Initialize database pool if URL is provided
    let executor: Option<Arc<dyn QueryExecutor>> = match &config.db_url {
        Some(db_url) => match DbPool::connect_lazy(
            db_url,
            config.db_max_connections,
            config.db_acquire_timeout(),
        ) {
            Ok(db) => Some(Arc::new(db) as Arc<dyn QueryExecutor>),
            Err(e) => {
                error!("Failed to initialize database pool: {}", e);
                warn!("Database health checks will report the database as down");
                None
            }
        },
        None if config.is_production() => {
            error!("No database URL configured in production - database health checks will report DOWN");
            None
        }
        None => {
            warn!("No database URL configured - database health checks will report DOWN");
            None
        }
    };

    let probe = HealthProbe::new(config.probe_timeout());
    info!("Database probe timeout: {:?}", probe.timeout());

    let app_routes = create_app_routes(AppState::new(probe, executor), &config.cors_origin_list());

    // Start the HTTP/API server
    let listener = tokio::net::TcpListener::bind(config.server_address()).await?;

    info!("🚀 Server running on http://{}", config.server_address());
    info!("📚 Swagger UI available at http://{}/swagger", config.server_address());

    axum::serve(listener, app_routes)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
