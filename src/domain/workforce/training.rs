//! Training history entries.
//!
//! Kept as a historical log; gap analysis does not read these records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{
    EmployeeId, SkillId, Timestamp, TrainingRecordId, ValidationError,
};

use super::require_non_empty;

/// Lifecycle state of a training course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompletionStatus {
    #[default]
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
}

impl CompletionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionStatus::InProgress => "In Progress",
            CompletionStatus::Completed => "Completed",
            CompletionStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompletionStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "in progress" | "in_progress" => Ok(CompletionStatus::InProgress),
            "completed" => Ok(CompletionStatus::Completed),
            "cancelled" => Ok(CompletionStatus::Cancelled),
            other => Err(ValidationError::invalid_format(
                "completion_status",
                format!("unknown status '{}'", other),
            )),
        }
    }
}

/// Fields for recording a training course.
#[derive(Debug, Clone)]
pub struct NewTrainingRecord {
    pub employee_id: EmployeeId,
    pub skill_id: SkillId,
    pub training_name: String,
    pub training_provider: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub completion_status: CompletionStatus,
    pub effectiveness_score: Option<f64>,
}

/// A course an employee took for a skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRecord {
    pub id: TrainingRecordId,
    pub employee_id: EmployeeId,
    pub skill_id: SkillId,
    pub training_name: String,
    pub training_provider: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub completion_status: CompletionStatus,
    /// 0 to 10.
    pub effectiveness_score: Option<f64>,
    pub created_at: Timestamp,
}

impl TrainingRecord {
    pub const MAX_EFFECTIVENESS: f64 = 10.0;

    /// Validates and creates a training record.
    pub fn create(details: NewTrainingRecord) -> Result<Self, ValidationError> {
        let training_name = require_non_empty("training_name", details.training_name)?;

        if let Some(score) = details.effectiveness_score {
            if !(0.0..=Self::MAX_EFFECTIVENESS).contains(&score) {
                return Err(ValidationError::invalid_format(
                    "effectiveness_score",
                    "must be between 0 and 10",
                ));
            }
        }
        if let (Some(start), Some(end)) = (details.start_date, details.end_date) {
            if end < start {
                return Err(ValidationError::invalid_format(
                    "end_date",
                    "must not be before start_date",
                ));
            }
        }

        Ok(Self {
            id: TrainingRecordId::new(),
            employee_id: details.employee_id,
            skill_id: details.skill_id,
            training_name,
            training_provider: details.training_provider,
            start_date: details.start_date,
            end_date: details.end_date,
            completion_status: details.completion_status,
            effectiveness_score: details.effectiveness_score,
            created_at: Timestamp::now(),
        })
    }
}
