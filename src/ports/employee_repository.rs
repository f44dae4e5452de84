//! Employee repository port.
//!
//! Covers employees and their assessed skill proficiencies. All methods run
//! inside the caller's unit of work.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EmployeeId, ProficiencyLevel, SkillId};
use crate::domain::workforce::{Employee, EmployeeFilter, EmployeeSkill};

#[async_trait]
pub trait EmployeeRepository: Send {
    /// Insert a new employee.
    ///
    /// # Errors
    ///
    /// - `EmployeeExists` if the employee code or email is taken
    /// - `RoleNotFound` if `role_id` does not reference a role
    /// - `DatabaseError` on persistence failure
    async fn insert(&mut self, employee: &Employee) -> Result<(), DomainError>;

    /// Overwrite an existing employee.
    ///
    /// # Errors
    ///
    /// - `EmployeeNotFound` if the employee does not exist
    /// - `EmployeeExists` if the new email collides with another employee
    async fn update(&mut self, employee: &Employee) -> Result<(), DomainError>;

    /// Returns `None` if not found.
    async fn find_by_id(&mut self, id: EmployeeId) -> Result<Option<Employee>, DomainError>;

    /// Lookup by business code such as `EMP001`.
    async fn find_by_code(&mut self, code: &str) -> Result<Option<Employee>, DomainError>;

    /// Employees matching `filter`, ordered by employee code.
    async fn list(&mut self, filter: &EmployeeFilter) -> Result<Vec<Employee>, DomainError>;

    /// Delete an employee with its proficiencies, gap records and training
    /// history. Returns false if the employee did not exist.
    async fn delete(&mut self, id: EmployeeId) -> Result<bool, DomainError>;

    /// Record a proficiency for a skill the employee does not have yet.
    ///
    /// # Errors
    ///
    /// - `SkillAlreadyAssigned` if the employee already has the skill
    /// - `EmployeeNotFound` / `SkillNotFound` for dangling references
    async fn assign_skill(&mut self, skill: &EmployeeSkill) -> Result<(), DomainError>;

    /// All assessed proficiencies of one employee.
    async fn list_skills(&mut self, employee_id: EmployeeId)
        -> Result<Vec<EmployeeSkill>, DomainError>;

    /// Assessed level for one skill, `None` if never assessed.
    async fn proficiency(
        &mut self,
        employee_id: EmployeeId,
        skill_id: SkillId,
    ) -> Result<Option<ProficiencyLevel>, DomainError>;
}
