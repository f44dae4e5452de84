//! HTTP adapter for the skill catalogue.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::skill_routes;
