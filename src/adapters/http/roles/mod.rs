//! HTTP adapter for roles and their skill requirements.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::role_routes;
