//! Axum router for gap analysis endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::super::state::AppState;
use super::handlers::{analyze_gaps, generate_recommendations, get_employee_gaps, get_predictions};

/// Create the analysis router, mounted at `/api/analysis`.
///
/// # Routes
///
/// - `POST /gaps` - Run gap analysis for one employee or everyone
/// - `GET /gaps/:employee_id` - Stored gaps for an employee
/// - `GET /predictions/:employee_id` - Training time and success predictions
/// - `POST /recommendations` - Ranked training recommendations
pub fn analysis_routes() -> Router<AppState> {
    Router::new()
        .route("/gaps", post(analyze_gaps))
        .route("/gaps/:employee_id", get(get_employee_gaps))
        .route("/predictions/:employee_id", get(get_predictions))
        .route("/recommendations", post(generate_recommendations))
}
