//! HTTP DTOs for gap analysis endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::gap_analysis::{
    AnalyzeSkillGapsResult, EmployeeGapsResult, SkillPredictionsResult,
};
use crate::domain::foundation::{EmployeeId, GapRecordId, SkillId};
use crate::domain::gap_analysis::{GapDetails, Priority, PredictionReport};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/analysis/gaps`. Empty analyzes every employee.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeGapsRequest {
    #[serde(default)]
    pub employee_id: Option<String>,
}

/// Body of `POST /api/analysis/recommendations`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationsRequest {
    #[serde(default)]
    pub employee_id: Option<String>,
    /// `high`, `medium`, `low` or `all`.
    #[serde(default)]
    pub priority: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One gap written by an analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct GapResultResponse {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub skill_id: SkillId,
    pub skill_name: String,
    pub current_level: i32,
    pub required_level: i32,
    pub gap_score: i32,
    pub priority: Priority,
    pub predicted_training_time: i32,
}

impl From<GapDetails> for GapResultResponse {
    fn from(details: GapDetails) -> Self {
        let gap = details.record.gap;
        Self {
            employee_id: gap.employee_id,
            employee_name: details.employee_name,
            skill_id: gap.skill_id,
            skill_name: details.skill_name,
            current_level: gap.current_level,
            required_level: gap.required_level,
            gap_score: gap.gap_score,
            priority: gap.priority,
            predicted_training_time: gap.predicted_training_time,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeGapsResponse {
    pub message: String,
    pub analyzed_employees: usize,
    pub total_gaps_found: usize,
    pub results: Vec<GapResultResponse>,
}

impl From<AnalyzeSkillGapsResult> for AnalyzeGapsResponse {
    fn from(result: AnalyzeSkillGapsResult) -> Self {
        Self {
            message: "Skill gap analysis completed".to_string(),
            analyzed_employees: result.employees_analyzed,
            total_gaps_found: result.gaps_found,
            results: result.records.into_iter().map(Into::into).collect(),
        }
    }
}

/// A stored gap as listed for one employee.
#[derive(Debug, Clone, Serialize)]
pub struct StoredGapResponse {
    pub id: GapRecordId,
    pub skill_id: SkillId,
    pub skill_name: String,
    pub skill_category: Option<String>,
    pub current_level: i32,
    pub required_level: i32,
    pub gap_score: i32,
    pub priority: Priority,
    pub predicted_training_time: i32,
    /// RFC 3339.
    pub analysis_date: String,
}

impl From<GapDetails> for StoredGapResponse {
    fn from(details: GapDetails) -> Self {
        let record = details.record;
        Self {
            id: record.id,
            skill_id: record.gap.skill_id,
            skill_name: details.skill_name,
            skill_category: details.skill_category,
            current_level: record.gap.current_level,
            required_level: record.gap.required_level,
            gap_score: record.gap.gap_score,
            priority: record.gap.priority,
            predicted_training_time: record.gap.predicted_training_time,
            analysis_date: record.analysis_date.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeGapsResponse {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub skill_gaps: Vec<StoredGapResponse>,
    pub total_gaps: usize,
    pub high_priority_gaps: usize,
}

impl From<EmployeeGapsResult> for EmployeeGapsResponse {
    fn from(result: EmployeeGapsResult) -> Self {
        Self {
            employee_id: result.employee.id,
            employee_name: result.employee.full_name(),
            skill_gaps: result.gaps.into_iter().map(Into::into).collect(),
            total_gaps: result.total_gaps,
            high_priority_gaps: result.high_priority_gaps,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionsResponse {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    #[serde(flatten)]
    pub report: PredictionReport,
}

impl From<SkillPredictionsResult> for PredictionsResponse {
    fn from(result: SkillPredictionsResult) -> Self {
        Self {
            employee_id: result.employee.id,
            employee_name: result.employee.full_name(),
            report: result.report,
        }
    }
}
