//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST API
//! - `memory` - In-process workforce store
//! - `postgres` - PostgreSQL workforce store

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryWorkforceStore;
pub use postgres::PostgresWorkforceStore;
