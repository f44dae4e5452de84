//! Employee entity and its skill proficiency associations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    EmployeeId, ProficiencyLevel, RoleId, SkillId, Timestamp, ValidationError,
};

use super::require_non_empty;

/// Fields required to register a new employee.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Option<String>,
    pub role_id: Option<RoleId>,
    pub hire_date: Option<NaiveDate>,
}

/// Partial update of an employee. `None` leaves a field untouched.
///
/// `role_id` is doubly optional so a caller can clear the assignment.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub role_id: Option<Option<RoleId>>,
    pub hire_date: Option<NaiveDate>,
}

/// A person whose skills are tracked against their role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    /// Business identifier such as `EMP001`. Unique.
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    /// Unique.
    pub email: String,
    pub department: Option<String>,
    pub role_id: Option<RoleId>,
    pub hire_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Employee {
    /// Validates and creates a new employee.
    pub fn create(details: NewEmployee) -> Result<Self, ValidationError> {
        let employee_code = require_non_empty("employee_id", details.employee_code)?;
        let first_name = require_non_empty("first_name", details.first_name)?;
        let last_name = require_non_empty("last_name", details.last_name)?;
        let email = validate_email(details.email)?;
        let now = Timestamp::now();

        Ok(Self {
            id: EmployeeId::new(),
            employee_code,
            first_name,
            last_name,
            email,
            department: details.department,
            role_id: details.role_id,
            hire_date: details.hire_date,
            created_at: now,
            updated_at: now,
        })
    }

    /// Display name, "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this employee has a role to be measured against.
    pub fn has_role(&self) -> bool {
        self.role_id.is_some()
    }

    /// Applies a partial update, validating every provided field first.
    pub fn apply_update(&mut self, update: EmployeeUpdate) -> Result<(), ValidationError> {
        let first_name = update
            .first_name
            .map(|v| require_non_empty("first_name", v))
            .transpose()?;
        let last_name = update
            .last_name
            .map(|v| require_non_empty("last_name", v))
            .transpose()?;
        let email = update.email.map(validate_email).transpose()?;

        if let Some(v) = first_name {
            self.first_name = v;
        }
        if let Some(v) = last_name {
            self.last_name = v;
        }
        if let Some(v) = email {
            self.email = v;
        }
        if let Some(v) = update.department {
            self.department = Some(v);
        }
        if let Some(v) = update.role_id {
            self.role_id = v;
        }
        if let Some(v) = update.hire_date {
            self.hire_date = Some(v);
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

fn validate_email(email: String) -> Result<String, ValidationError> {
    let email = require_non_empty("email", email)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(ValidationError::invalid_format("email", "missing @ symbol")),
    }
}

/// An employee's assessed proficiency in one skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSkill {
    pub employee_id: EmployeeId,
    pub skill_id: SkillId,
    pub proficiency_level: ProficiencyLevel,
    pub assessed_date: Timestamp,
}

impl EmployeeSkill {
    /// Records a proficiency assessed now.
    pub fn assessed_now(
        employee_id: EmployeeId,
        skill_id: SkillId,
        proficiency_level: ProficiencyLevel,
    ) -> Self {
        Self {
            employee_id,
            skill_id,
            proficiency_level,
            assessed_date: Timestamp::now(),
        }
    }
}

/// Optional filters for listing employees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub department: Option<String>,
    pub role_id: Option<RoleId>,
}

impl EmployeeFilter {
    /// Returns true when the employee satisfies every set filter.
    pub fn matches(&self, employee: &Employee) -> bool {
        let department_ok = self
            .department
            .as_ref()
            .map_or(true, |d| employee.department.as_ref() == Some(d));
        let role_ok = self
            .role_id
            .map_or(true, |r| employee.role_id == Some(r));
        department_ok && role_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_employee() -> NewEmployee {
        NewEmployee {
            employee_code: "EMP001".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            department: Some("Engineering".to_string()),
            role_id: None,
            hire_date: NaiveDate::from_ymd_opt(2021, 3, 1),
        }
    }

    #[test]
    fn create_accepts_valid_details() {
        let employee = Employee::create(new_employee()).unwrap();
        assert_eq!(employee.full_name(), "Ada Lovelace");
        assert!(!employee.has_role());
    }

    #[test]
    fn create_rejects_blank_required_fields() {
        let mut details = new_employee();
        details.first_name = "   ".to_string();
        assert!(matches!(
            Employee::create(details),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn create_rejects_email_without_at() {
        let mut details = new_employee();
        details.email = "ada.example.com".to_string();
        assert!(matches!(
            Employee::create(details),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn apply_update_changes_only_provided_fields() {
        let mut employee = Employee::create(new_employee()).unwrap();
        let role = RoleId::new();
        employee
            .apply_update(EmployeeUpdate {
                department: Some("Data".to_string()),
                role_id: Some(Some(role)),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(employee.first_name, "Ada");
        assert_eq!(employee.department.as_deref(), Some("Data"));
        assert_eq!(employee.role_id, Some(role));
    }

    #[test]
    fn apply_update_can_clear_role() {
        let mut details = new_employee();
        details.role_id = Some(RoleId::new());
        let mut employee = Employee::create(details).unwrap();

        employee
            .apply_update(EmployeeUpdate {
                role_id: Some(None),
                ..Default::default()
            })
            .unwrap();

        assert!(employee.role_id.is_none());
    }

    #[test]
    fn apply_update_is_all_or_nothing() {
        let mut employee = Employee::create(new_employee()).unwrap();
        let result = employee.apply_update(EmployeeUpdate {
            first_name: Some("Grace".to_string()),
            email: Some("bad".to_string()),
            ..Default::default()
        });

        assert!(result.is_err());
        assert_eq!(employee.first_name, "Ada");
    }

    #[test]
    fn filter_matches_department_and_role() {
        let role = RoleId::new();
        let mut details = new_employee();
        details.role_id = Some(role);
        let employee = Employee::create(details).unwrap();

        assert!(EmployeeFilter::default().matches(&employee));
        assert!(EmployeeFilter {
            department: Some("Engineering".to_string()),
            role_id: Some(role),
        }
        .matches(&employee));
        assert!(!EmployeeFilter {
            department: Some("Sales".to_string()),
            role_id: None,
        }
        .matches(&employee));
        assert!(!EmployeeFilter {
            department: None,
            role_id: Some(RoleId::new()),
        }
        .matches(&employee));
    }
}
