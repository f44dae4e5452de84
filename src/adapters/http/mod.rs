//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own module with DTOs, handlers and routes.
//! [`app_router`] mounts them all under `/api`.

pub mod analysis;
pub mod employees;
pub mod error;
pub mod extract;
pub mod response;
pub mod roles;
pub mod router;
pub mod skills;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use router::app_router;
pub use state::AppState;
