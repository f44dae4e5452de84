//! Loads the JSON sample data set into the configured store.
//!
//! Usage: `load-sample-data [DIR]` (default `data/sample`).

use std::path::PathBuf;

use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use skills_gap_analyzer::adapters::PostgresWorkforceStore;
use skills_gap_analyzer::application::sample_data::{load_sample_data, LoaderError};
use skills_gap_analyzer::config::{AppConfig, ConfigError, StorageBackend, ValidationError};
use skills_gap_analyzer::domain::foundation::DomainError;

const DEFAULT_DIR: &str = "data/sample";

#[derive(Debug, Error)]
enum LoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("the sample data loader needs the postgres backend")]
    MemoryBackend,

    #[error("storage initialisation failed: {0}")]
    Storage(#[from] DomainError),

    #[error(transparent)]
    Loader(#[from] LoaderError),
}

#[tokio::main]
async fn main() -> Result<(), LoadError> {
    let config = AppConfig::load()?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    config.validate()?;

    if config.database.backend == StorageBackend::Memory {
        return Err(LoadError::MemoryBackend);
    }

    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR));

    let store = PostgresWorkforceStore::connect(&config.database).await?;
    if config.database.run_migrations {
        store.migrate().await?;
    }

    let summary = load_sample_data(&store, &dir).await?;
    if summary.is_empty() {
        info!(dir = %dir.display(), "No new data loaded; everything already exists");
    }
    Ok(())
}
