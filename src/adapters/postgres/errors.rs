//! Translation of sqlx errors into domain errors.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Maps constraint violations to their domain meaning; anything else
/// becomes a `DatabaseError` carrying `context`.
pub(super) fn map_db_error(context: &str, err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if let Some(constraint) = db_err.constraint() {
            if let Some(mapped) = constraint_error(constraint) {
                return mapped;
            }
        }
    }
    DomainError::database(context, err)
}

fn constraint_error(constraint: &str) -> Option<DomainError> {
    let (code, message) = match constraint {
        "employees_employee_code_key" | "employees_email_key" => (
            ErrorCode::EmployeeExists,
            "Employee ID or email already exists",
        ),
        "skills_name_key" => (ErrorCode::SkillExists, "Skill name already exists"),
        "employee_skills_pkey" => (
            ErrorCode::SkillAlreadyAssigned,
            "Skill already assigned to employee",
        ),
        "employees_role_id_fkey" | "role_skills_role_id_fkey" => {
            (ErrorCode::RoleNotFound, "Role not found")
        }
        c if c.ends_with("_employee_id_fkey") => (ErrorCode::EmployeeNotFound, "Employee not found"),
        c if c.ends_with("_skill_id_fkey") => (ErrorCode::SkillNotFound, "Skill not found"),
        _ => return None,
    };
    Some(DomainError::new(code, message).with_detail("constraint", constraint))
}

/// A stored value that no longer satisfies the domain's rules.
pub(super) fn corrupt_row(column: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Invalid {} value in database: {}", column, err),
    )
}
