//! Axum router for role endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use super::super::state::AppState;
use super::handlers::{create_role, get_role, list_roles, set_requirements};

/// Create the role router, mounted at `/api/roles`.
///
/// # Routes
///
/// - `GET /` / `POST /` - List / create
/// - `GET /:id` - Role with requirements
/// - `PUT /:id/requirements` - Replace requirements
pub fn role_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_roles).post(create_role))
        .route("/:id", get(get_role))
        .route("/:id/requirements", put(set_requirements))
}
