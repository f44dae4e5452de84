//! In-memory adapters.
//!
//! Useful for tests and for running the service without a database.

mod workforce_store;

pub use workforce_store::InMemoryWorkforceStore;
