//! Training history repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EmployeeId};
use crate::domain::workforce::TrainingRecord;

#[async_trait]
pub trait TrainingRecordRepository: Send {
    /// # Errors
    ///
    /// - `EmployeeNotFound` / `SkillNotFound` for dangling references
    async fn insert(&mut self, record: &TrainingRecord) -> Result<(), DomainError>;

    /// Training of one employee, most recent start date first.
    async fn list_for_employee(
        &mut self,
        employee_id: EmployeeId,
    ) -> Result<Vec<TrainingRecord>, DomainError>;
}
