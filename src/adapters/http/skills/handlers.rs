//! HTTP handlers for skill catalogue endpoints.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::skills::{
    CreateSkillCommand, DeleteSkillCommand, GetSkillQuery, ListSkillsQuery, UpdateSkillCommand,
};
use crate::domain::foundation::SkillId;
use crate::domain::workforce::SkillUpdate;

use super::super::error::{parse_id, ApiError};
use super::super::response::MessageResponse;
use super::super::state::AppState;
use super::dto::{
    CategoriesResponse, CreateSkillRequest, ListSkillsParams, SkillListResponse, SkillResponse,
    UpdateSkillRequest,
};

/// GET /api/skills - List skills, optionally by category
pub async fn list_skills(
    State(state): State<AppState>,
    params: Result<Query<ListSkillsParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;

    let skills = state
        .list_skills_handler()
        .handle(ListSkillsQuery {
            category: params.category,
        })
        .await?;

    Ok(Json(SkillListResponse::from(skills)))
}

/// GET /api/skills/categories - Distinct categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = state.list_skills_handler().categories().await?;

    Ok(Json(CategoriesResponse {
        count: categories.len(),
        categories,
    }))
}

/// POST /api/skills - Add a skill to the catalogue
pub async fn create_skill(
    State(state): State<AppState>,
    payload: Result<Json<CreateSkillRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    let skill = state
        .create_skill_handler()
        .handle(CreateSkillCommand {
            name: request.name,
            description: request.description,
            category: request.category,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(SkillResponse::from(skill))))
}

/// GET /api/skills/:id - Get a skill
pub async fn get_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let skill_id = parse_id::<SkillId>(&id, "skill_id")?;

    let skill = state
        .get_skill_handler()
        .handle(GetSkillQuery { skill_id })
        .await?;

    Ok(Json(SkillResponse::from(skill)))
}

/// PUT /api/skills/:id - Partial update
pub async fn update_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateSkillRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let skill_id = parse_id::<SkillId>(&id, "skill_id")?;
    let Json(request) = payload?;

    let skill = state
        .update_skill_handler()
        .handle(UpdateSkillCommand {
            skill_id,
            update: SkillUpdate {
                name: request.name,
                description: request.description,
                category: request.category,
            },
        })
        .await?;

    Ok(Json(SkillResponse::from(skill)))
}

/// DELETE /api/skills/:id - Delete a skill and every reference to it
pub async fn delete_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let skill_id = parse_id::<SkillId>(&id, "skill_id")?;

    state
        .delete_skill_handler()
        .handle(DeleteSkillCommand { skill_id })
        .await?;

    Ok(Json(MessageResponse::new("Skill deleted successfully")))
}
