//! Axum router for employee endpoints.

use axum::{routing::get, Router};

use super::super::state::AppState;
use super::handlers::{
    assign_skill, create_employee, delete_employee, get_employee, list_employee_skills,
    list_employees, list_training, record_training, update_employee,
};

/// Create the employee router, mounted at `/api/employees`.
///
/// # Routes
///
/// - `GET /` / `POST /` - List (filters `department`, `role_id`) / create
/// - `GET /:id` / `PUT /:id` / `DELETE /:id` - Read with skills / update / delete
/// - `GET /:id/skills` / `POST /:id/skills` - Assessed skills / assign a skill
/// - `GET /:id/training` / `POST /:id/training` - Training history / record training
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/:id/skills", get(list_employee_skills).post(assign_skill))
        .route("/:id/training", get(list_training).post(record_training))
}
