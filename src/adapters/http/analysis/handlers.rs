//! HTTP handlers for gap analysis endpoints.

use axum::body::Bytes;
use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;

use crate::application::handlers::gap_analysis::{
    AnalyzeSkillGapsCommand, GenerateRecommendationsCommand, GetEmployeeGapsQuery,
    GetSkillPredictionsQuery,
};
use crate::domain::foundation::EmployeeId;
use crate::domain::gap_analysis::PriorityFilter;

use super::super::error::{parse_id, ApiError};
use super::super::extract::optional_json;
use super::super::state::AppState;
use super::dto::{
    AnalyzeGapsRequest, AnalyzeGapsResponse, EmployeeGapsResponse, PredictionsResponse,
    RecommendationsRequest,
};

/// POST /api/analysis/gaps - Recompute and store gaps
pub async fn analyze_gaps(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let request: AnalyzeGapsRequest = optional_json(&body)?;
    let employee_id = request
        .employee_id
        .as_deref()
        .map(|raw| parse_id::<EmployeeId>(raw, "employee_id"))
        .transpose()?;

    let result = state
        .analyze_skill_gaps_handler()
        .handle(AnalyzeSkillGapsCommand { employee_id })
        .await?;

    Ok(Json(AnalyzeGapsResponse::from(result)))
}

/// GET /api/analysis/gaps/:employee_id - Stored gaps for one employee
pub async fn get_employee_gaps(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let employee_id = parse_id::<EmployeeId>(&employee_id, "employee_id")?;

    let result = state
        .employee_gaps_handler()
        .handle(GetEmployeeGapsQuery { employee_id })
        .await?;

    Ok(Json(EmployeeGapsResponse::from(result)))
}

/// GET /api/analysis/predictions/:employee_id - Training predictions
pub async fn get_predictions(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let employee_id = parse_id::<EmployeeId>(&employee_id, "employee_id")?;

    let result = state
        .skill_predictions_handler()
        .handle(GetSkillPredictionsQuery { employee_id })
        .await?;

    Ok(Json(PredictionsResponse::from(result)))
}

/// POST /api/analysis/recommendations - Ranked training recommendations
pub async fn generate_recommendations(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let request: RecommendationsRequest = optional_json(&body)?;
    let employee_id = request
        .employee_id
        .as_deref()
        .map(|raw| parse_id::<EmployeeId>(raw, "employee_id"))
        .transpose()?;
    let priority = match request.priority.as_deref() {
        Some(raw) => raw.parse::<PriorityFilter>()?,
        None => PriorityFilter::All,
    };

    let report = state
        .recommendations_handler()
        .handle(GenerateRecommendationsCommand {
            employee_id,
            priority,
        })
        .await?;

    Ok(Json(report))
}
