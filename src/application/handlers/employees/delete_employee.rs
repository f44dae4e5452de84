//! DeleteEmployeeHandler - Removes an employee and everything tied to them.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, EmployeeId};
use crate::ports::WorkforceStore;

use super::super::employee_not_found;

#[derive(Debug, Clone)]
pub struct DeleteEmployeeCommand {
    pub employee_id: EmployeeId,
}

pub struct DeleteEmployeeHandler {
    store: Arc<dyn WorkforceStore>,
}

impl DeleteEmployeeHandler {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteEmployeeCommand) -> Result<(), DomainError> {
        let mut uow = self.store.begin().await?;
        if !uow.employees().delete(cmd.employee_id).await? {
            return Err(employee_not_found(cmd.employee_id));
        }
        uow.commit().await?;

        info!(employee_id = %cmd.employee_id, "Employee deleted");
        Ok(())
    }
}
