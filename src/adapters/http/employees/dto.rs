//! HTTP DTOs for employee endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::application::handlers::employees::{AssessedSkill, EmployeeView};
use crate::domain::foundation::{EmployeeId, RoleId, SkillId};
use crate::domain::workforce::{Employee, TrainingRecord};

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployeeRequest {
    /// Business code such as `EMP001`.
    #[serde(alias = "employee_id")]
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub role_id: Option<String>,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
}

/// Partial update. Send `"role_id": null` to clear the role.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEmployeeRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub role_id: Option<Option<String>>,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEmployeesParams {
    pub department: Option<String>,
    pub role_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssignSkillRequest {
    pub skill_id: String,
    /// 1 to 5, defaults to 1.
    #[serde(default)]
    pub proficiency_level: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordTrainingRequest {
    pub skill_id: String,
    pub training_name: String,
    #[serde(default)]
    pub training_provider: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// `Completed`, `In Progress` or `Cancelled`; defaults to in progress.
    #[serde(default)]
    pub completion_status: Option<String>,
    #[serde(default)]
    pub effectiveness_score: Option<f64>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct AssessedSkillResponse {
    pub skill_id: SkillId,
    pub name: String,
    pub category: Option<String>,
    pub proficiency_level: i32,
    /// RFC 3339.
    pub assessed_date: String,
}

impl From<AssessedSkill> for AssessedSkillResponse {
    fn from(assessed: AssessedSkill) -> Self {
        Self {
            skill_id: assessed.skill.id,
            name: assessed.skill.name,
            category: assessed.skill.category,
            proficiency_level: assessed.proficiency_level.value(),
            assessed_date: assessed.assessed_date.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeResponse {
    pub id: EmployeeId,
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub department: Option<String>,
    pub role_id: Option<RoleId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_title: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<AssessedSkillResponse>>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            full_name: employee.full_name(),
            id: employee.id,
            employee_code: employee.employee_code,
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            department: employee.department,
            role_id: employee.role_id,
            role_title: None,
            hire_date: employee.hire_date,
            created_at: employee.created_at.to_rfc3339(),
            updated_at: employee.updated_at.to_rfc3339(),
            skills: None,
        }
    }
}

impl From<EmployeeView> for EmployeeResponse {
    fn from(view: EmployeeView) -> Self {
        Self {
            role_title: view.role.map(|r| r.title),
            skills: Some(view.skills.into_iter().map(Into::into).collect()),
            ..Self::from(view.employee)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeListResponse {
    pub employees: Vec<EmployeeResponse>,
    pub count: usize,
}

impl From<Vec<Employee>> for EmployeeListResponse {
    fn from(employees: Vec<Employee>) -> Self {
        Self {
            count: employees.len(),
            employees: employees.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeSkillsResponse {
    pub employee_id: EmployeeId,
    pub skills: Vec<AssessedSkillResponse>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillAssignedResponse {
    pub message: String,
    pub employee_id: EmployeeId,
    pub skill_id: SkillId,
    pub proficiency_level: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrainingHistoryResponse {
    pub employee_id: EmployeeId,
    pub training_records: Vec<TrainingRecord>,
    pub count: usize,
}
