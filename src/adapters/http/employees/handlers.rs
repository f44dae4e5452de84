//! HTTP handlers for employee endpoints.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::employees::{
    AssignSkillCommand, CreateEmployeeCommand, DeleteEmployeeCommand, GetEmployeeQuery,
    ListEmployeeSkillsQuery, ListEmployeesQuery, ListTrainingQuery, RecordTrainingCommand,
    UpdateEmployeeCommand,
};
use crate::domain::foundation::{EmployeeId, ProficiencyLevel, RoleId, SkillId};
use crate::domain::workforce::{
    CompletionStatus, EmployeeFilter, EmployeeUpdate, NewTrainingRecord,
};

use super::super::error::{parse_id, ApiError};
use super::super::response::MessageResponse;
use super::super::state::AppState;
use super::dto::{
    AssignSkillRequest, CreateEmployeeRequest, EmployeeListResponse, EmployeeResponse,
    EmployeeSkillsResponse, ListEmployeesParams, RecordTrainingRequest,
    SkillAssignedResponse, TrainingHistoryResponse, UpdateEmployeeRequest,
};

fn parse_role_id(raw: Option<&str>) -> Result<Option<RoleId>, ApiError> {
    raw.map(|r| parse_id::<RoleId>(r, "role_id")).transpose()
}

// ════════════════════════════════════════════════════════════════════════════════
// Employees
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/employees - List employees, optionally by department or role
pub async fn list_employees(
    State(state): State<AppState>,
    params: Result<Query<ListEmployeesParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let filter = EmployeeFilter {
        department: params.department,
        role_id: parse_role_id(params.role_id.as_deref())?,
    };

    let employees = state
        .list_employees_handler()
        .handle(ListEmployeesQuery { filter })
        .await?;

    Ok(Json(EmployeeListResponse::from(employees)))
}

/// POST /api/employees - Create an employee
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let cmd = CreateEmployeeCommand {
        employee_code: request.employee_code,
        first_name: request.first_name,
        last_name: request.last_name,
        email: request.email,
        department: request.department,
        role_id: parse_role_id(request.role_id.as_deref())?,
        hire_date: request.hire_date,
    };

    let employee = state.create_employee_handler().handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(employee))))
}

/// GET /api/employees/:id - Employee with role and skills
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let employee_id = parse_id::<EmployeeId>(&id, "employee_id")?;

    let view = state
        .get_employee_handler()
        .handle(GetEmployeeQuery { employee_id })
        .await?;

    Ok(Json(EmployeeResponse::from(view)))
}

/// PUT /api/employees/:id - Partial update
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateEmployeeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let employee_id = parse_id::<EmployeeId>(&id, "employee_id")?;
    let Json(request) = payload?;
    let role_id = match request.role_id {
        Some(raw) => Some(parse_role_id(raw.as_deref())?),
        None => None,
    };
    let update = EmployeeUpdate {
        first_name: request.first_name,
        last_name: request.last_name,
        email: request.email,
        department: request.department,
        role_id,
        hire_date: request.hire_date,
    };

    let employee = state
        .update_employee_handler()
        .handle(UpdateEmployeeCommand {
            employee_id,
            update,
        })
        .await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

/// DELETE /api/employees/:id - Delete an employee and their history
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let employee_id = parse_id::<EmployeeId>(&id, "employee_id")?;

    state
        .delete_employee_handler()
        .handle(DeleteEmployeeCommand { employee_id })
        .await?;

    Ok(Json(MessageResponse::new("Employee deleted successfully")))
}

// ════════════════════════════════════════════════════════════════════════════════
// Skills
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/employees/:id/skills - Assessed skills
pub async fn list_employee_skills(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let employee_id = parse_id::<EmployeeId>(&id, "employee_id")?;

    let skills = state
        .list_employee_skills_handler()
        .handle(ListEmployeeSkillsQuery { employee_id })
        .await?;

    Ok(Json(EmployeeSkillsResponse {
        employee_id,
        count: skills.len(),
        skills: skills.into_iter().map(Into::into).collect(),
    }))
}

/// POST /api/employees/:id/skills - Assign a skill with a proficiency level
pub async fn assign_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AssignSkillRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let employee_id = parse_id::<EmployeeId>(&id, "employee_id")?;
    let Json(request) = payload?;
    let skill_id = parse_id::<SkillId>(&request.skill_id, "skill_id")?;
    let proficiency_level = request
        .proficiency_level
        .map(ProficiencyLevel::try_new)
        .transpose()?;

    let assessed = state
        .assign_skill_handler()
        .handle(AssignSkillCommand {
            employee_id,
            skill_id,
            proficiency_level,
        })
        .await?;

    let response = SkillAssignedResponse {
        message: "Skill assigned successfully".to_string(),
        employee_id: assessed.employee_id,
        skill_id: assessed.skill_id,
        proficiency_level: assessed.proficiency_level.value(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Training
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/employees/:id/training - Training history, newest first
pub async fn list_training(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let employee_id = parse_id::<EmployeeId>(&id, "employee_id")?;

    let records = state
        .list_training_handler()
        .handle(ListTrainingQuery { employee_id })
        .await?;

    Ok(Json(TrainingHistoryResponse {
        employee_id,
        count: records.len(),
        training_records: records,
    }))
}

/// POST /api/employees/:id/training - Record a training course
pub async fn record_training(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RecordTrainingRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let employee_id = parse_id::<EmployeeId>(&id, "employee_id")?;
    let Json(request) = payload?;
    let completion_status = match request.completion_status.as_deref() {
        Some(raw) => raw.parse::<CompletionStatus>()?,
        None => CompletionStatus::default(),
    };

    let details = NewTrainingRecord {
        employee_id,
        skill_id: parse_id::<SkillId>(&request.skill_id, "skill_id")?,
        training_name: request.training_name,
        training_provider: request.training_provider,
        start_date: request.start_date,
        end_date: request.end_date,
        completion_status,
        effectiveness_score: request.effectiveness_score,
    };

    let record = state
        .record_training_handler()
        .handle(RecordTrainingCommand { details })
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}
