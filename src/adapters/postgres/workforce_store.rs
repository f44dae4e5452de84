//! PostgreSQL workforce store.
//!
//! Each unit of work owns one database transaction. Repository calls made
//! through it run on that transaction; dropping it without `commit` rolls
//! the transaction back.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{Postgres, Transaction};

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{
    EmployeeRepository, GapRecordRepository, RoleRepository, SkillRepository,
    TrainingRecordRepository, UnitOfWork, WorkforceStore,
};

use super::errors::map_db_error;

/// PostgreSQL implementation of the WorkforceStore port.
#[derive(Clone)]
pub struct PostgresWorkforceStore {
    pool: PgPool,
}

impl PostgresWorkforceStore {
    /// Creates a store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool sized by `config`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DomainError> {
        let pool = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .idle_timeout(config.idle_timeout())
            .max_lifetime(config.max_lifetime())
            .connect(&config.url)
            .await
            .map_err(|e| map_db_error("Failed to connect to database", e))?;
        Ok(Self::new(pool))
    }

    /// Applies the embedded migrations in `migrations/`.
    pub async fn migrate(&self) -> Result<(), DomainError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to run migrations: {}", e),
                )
            })
    }
}

#[async_trait]
impl WorkforceStore for PostgresWorkforceStore {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, DomainError> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error("Failed to begin transaction", e))?;
        Ok(Box::new(PostgresUnitOfWork { tx }))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("Database ping failed", e))?;
        Ok(())
    }
}

/// A transaction exposing every workforce repository.
pub struct PostgresUnitOfWork {
    pub(super) tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl UnitOfWork for PostgresUnitOfWork {
    fn employees(&mut self) -> &mut dyn EmployeeRepository {
        self
    }

    fn skills(&mut self) -> &mut dyn SkillRepository {
        self
    }

    fn roles(&mut self) -> &mut dyn RoleRepository {
        self
    }

    fn gap_records(&mut self) -> &mut dyn GapRecordRepository {
        self
    }

    fn training_records(&mut self) -> &mut dyn TrainingRecordRepository {
        self
    }

    async fn commit(self: Box<Self>) -> Result<(), DomainError> {
        self.tx
            .commit()
            .await
            .map_err(|e| map_db_error("Failed to commit transaction", e))
    }
}
