//! HTTP handlers for role endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::roles::{
    CreateRoleCommand, GetRoleQuery, RequirementInput, SetRoleRequirementsCommand,
};
use crate::domain::foundation::{ProficiencyLevel, RoleId, SkillId};

use super::super::error::{parse_id, ApiError};
use super::super::state::AppState;
use super::dto::{
    CreateRoleRequest, RequirementRequest, RoleListResponse, RoleResponse,
    SetRequirementsRequest,
};

fn requirement_inputs(requests: &[RequirementRequest]) -> Result<Vec<RequirementInput>, ApiError> {
    requests
        .iter()
        .map(|req| {
            Ok(RequirementInput {
                skill_id: parse_id::<SkillId>(&req.skill_id, "skill_id")?,
                required_level: req
                    .required_level
                    .map(ProficiencyLevel::try_new)
                    .transpose()?,
            })
        })
        .collect()
}

/// GET /api/roles - List roles
pub async fn list_roles(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let roles = state.list_roles_handler().handle().await?;
    Ok(Json(RoleListResponse::from(roles)))
}

/// POST /api/roles - Create a role with optional requirements
pub async fn create_role(
    State(state): State<AppState>,
    payload: Result<Json<CreateRoleRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let cmd = CreateRoleCommand {
        requirements: requirement_inputs(&request.required_skills)?,
        title: request.title,
        description: request.description,
        department: request.department,
        level: request.level,
    };

    let view = state.create_role_handler().handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(RoleResponse::from(view))))
}

/// GET /api/roles/:id - Role with its requirements
pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let role_id = parse_id::<RoleId>(&id, "role_id")?;

    let view = state
        .get_role_handler()
        .handle(GetRoleQuery { role_id })
        .await?;

    Ok(Json(RoleResponse::from(view)))
}

/// PUT /api/roles/:id/requirements - Replace the requirement set
pub async fn set_requirements(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<SetRequirementsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let role_id = parse_id::<RoleId>(&id, "role_id")?;
    let Json(request) = payload?;

    let view = state
        .set_role_requirements_handler()
        .handle(SetRoleRequirementsCommand {
            role_id,
            requirements: requirement_inputs(&request.required_skills)?,
        })
        .await?;

    Ok(Json(RoleResponse::from(view)))
}
