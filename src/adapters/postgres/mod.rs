//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresWorkforceStore` - Pool owner; opens transaction-backed units of work
//! - `PostgresUnitOfWork` - Implements every workforce repository on one transaction

mod employee_repository;
mod errors;
mod gap_record_repository;
mod role_repository;
mod skill_repository;
mod training_record_repository;
mod workforce_store;

pub use workforce_store::{PostgresUnitOfWork, PostgresWorkforceStore};
