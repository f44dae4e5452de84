//! Axum router for skill catalogue endpoints.

use axum::{routing::get, Router};

use super::super::state::AppState;
use super::handlers::{
    create_skill, delete_skill, get_skill, list_categories, list_skills, update_skill,
};

/// Create the skill router, mounted at `/api/skills`.
///
/// The static `/categories` segment takes precedence over `/:id`.
pub fn skill_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_skills).post(create_skill))
        .route("/categories", get(list_categories))
        .route(
            "/:id",
            get(get_skill).put(update_skill).delete(delete_skill),
        )
}
