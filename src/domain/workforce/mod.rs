//! Workforce module - employees, skills, roles and their associations.
//!
//! The many-to-many links carry their own data, so they are modelled as
//! first-class entities: `EmployeeSkill` (proficiency) and
//! `RoleSkillRequirement` (required level).

mod employee;
mod role;
mod skill;
mod training;

pub use employee::{Employee, EmployeeFilter, EmployeeSkill, EmployeeUpdate, NewEmployee};
pub use role::{Role, RoleSkillRequirement};
pub use skill::{Skill, SkillUpdate};
pub use training::{CompletionStatus, NewTrainingRecord, TrainingRecord};

use crate::domain::foundation::ValidationError;

/// Trims a required text field, rejecting blank input.
fn require_non_empty(field: &str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}
