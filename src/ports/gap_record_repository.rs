//! Skill gap record repository port.
//!
//! Rows are unique per (employee, skill). Writing a record for a pair that
//! already has one replaces its values in place. Rows for skills that are no
//! longer required of the employee are pruned with `delete_for_employee_except`.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EmployeeId, SkillId};
use crate::domain::gap_analysis::{GapDetails, GapRecordFilter, SkillGapRecord};

#[async_trait]
pub trait GapRecordRepository: Send {
    /// Insert or replace the record for `record.key()`.
    ///
    /// Returns the stored row. When a row already existed its id is kept and
    /// the id on `record` is ignored.
    async fn upsert(&mut self, record: &SkillGapRecord) -> Result<SkillGapRecord, DomainError>;

    /// Stored records matching `filter`, joined with employee and skill
    /// names. Ordered by employee code, then skill name.
    async fn list(&mut self, filter: &GapRecordFilter) -> Result<Vec<GapDetails>, DomainError>;

    /// Delete every record of `employee_id` whose skill is not in `keep`.
    /// An empty `keep` removes all of the employee's records.
    ///
    /// Returns the number of rows removed.
    async fn delete_for_employee_except(
        &mut self,
        employee_id: EmployeeId,
        keep: &[SkillId],
    ) -> Result<u64, DomainError>;
}
