//! Command and query handlers.
//!
//! Every handler holds the shared `WorkforceStore` and opens one unit of work
//! per call. Commands commit before returning; queries drop their unit.

pub mod employees;
pub mod gap_analysis;
pub mod roles;
pub mod skills;

#[cfg(test)]
pub(crate) mod test_support;

use crate::domain::foundation::{DomainError, EmployeeId, ErrorCode, RoleId, SkillId};

fn employee_not_found(id: EmployeeId) -> DomainError {
    DomainError::new(ErrorCode::EmployeeNotFound, "Employee not found")
        .with_detail("employee_id", id.to_string())
}

fn skill_not_found(id: SkillId) -> DomainError {
    DomainError::new(ErrorCode::SkillNotFound, "Skill not found")
        .with_detail("skill_id", id.to_string())
}

fn role_not_found(id: RoleId) -> DomainError {
    DomainError::new(ErrorCode::RoleNotFound, "Role not found")
        .with_detail("role_id", id.to_string())
}
