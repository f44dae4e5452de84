//! HTTP adapter for gap analysis.
//!
//! - `POST /api/analysis/gaps` - Analyze and store skill gaps
//! - `GET /api/analysis/gaps/:employee_id` - Stored gaps for an employee
//! - `GET /api/analysis/predictions/:employee_id` - Training predictions
//! - `POST /api/analysis/recommendations` - Training recommendations

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::analysis_routes;
