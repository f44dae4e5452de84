//! Skills gap analyzer HTTP server.

use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use skills_gap_analyzer::adapters::http::{app_router, AppState};
use skills_gap_analyzer::adapters::{InMemoryWorkforceStore, PostgresWorkforceStore};
use skills_gap_analyzer::config::{AppConfig, ConfigError, StorageBackend, ValidationError};
use skills_gap_analyzer::domain::foundation::DomainError;
use skills_gap_analyzer::ports::WorkforceStore;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("storage initialisation failed: {0}")]
    Storage(#[from] DomainError),

    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn open_store(config: &AppConfig) -> Result<Arc<dyn WorkforceStore>, StartupError> {
    match config.database.backend {
        StorageBackend::Postgres => {
            let store = PostgresWorkforceStore::connect(&config.database).await?;
            if config.database.run_migrations {
                store.migrate().await?;
                info!("Database migrations applied");
            }
            Ok(Arc::new(store))
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; data is lost on restart");
            Ok(Arc::new(InMemoryWorkforceStore::new()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let store = open_store(&config).await?;
    let app = app_router(AppState::new(store), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Skills gap analyzer listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
