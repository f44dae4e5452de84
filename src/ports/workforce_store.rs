//! Store and unit-of-work ports.
//!
//! A `WorkforceStore` hands out units of work. Every repository call made
//! through a unit of work is part of one transaction: nothing is visible to
//! other units until `commit`, and dropping the unit without committing
//! discards its writes.
//!
//! # Example
//!
//! ```ignore
//! let mut uow = store.begin().await?;
//! let employee = uow.employees().find_by_id(id).await?;
//! uow.gap_records().upsert(&record).await?;
//! uow.commit().await?;
//! ```

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

use super::{
    EmployeeRepository, GapRecordRepository, RoleRepository, SkillRepository,
    TrainingRecordRepository,
};

/// One transaction over all workforce repositories.
#[async_trait]
pub trait UnitOfWork: Send {
    fn employees(&mut self) -> &mut dyn EmployeeRepository;

    fn skills(&mut self) -> &mut dyn SkillRepository;

    fn roles(&mut self) -> &mut dyn RoleRepository;

    fn gap_records(&mut self) -> &mut dyn GapRecordRepository;

    fn training_records(&mut self) -> &mut dyn TrainingRecordRepository;

    /// Make every write of this unit durable and visible.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` if the commit fails; nothing is applied
    async fn commit(self: Box<Self>) -> Result<(), DomainError>;
}

/// Entry point to persistence.
#[async_trait]
pub trait WorkforceStore: Send + Sync {
    /// Open a new unit of work.
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, DomainError>;

    /// Cheap liveness probe for health checks.
    async fn ping(&self) -> Result<(), DomainError>;
}
