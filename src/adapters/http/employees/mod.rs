//! HTTP adapter for employees, their skills and training history.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::employee_routes;
