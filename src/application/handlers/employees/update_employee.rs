//! UpdateEmployeeHandler - Command handler for partial employee updates.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EmployeeId};
use crate::domain::workforce::{Employee, EmployeeUpdate};
use crate::ports::WorkforceStore;

use super::super::employee_not_found;

#[derive(Debug, Clone)]
pub struct UpdateEmployeeCommand {
    pub employee_id: EmployeeId,
    pub update: EmployeeUpdate,
}

pub struct UpdateEmployeeHandler {
    store: Arc<dyn WorkforceStore>,
}

impl UpdateEmployeeHandler {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: UpdateEmployeeCommand) -> Result<Employee, DomainError> {
        let mut uow = self.store.begin().await?;

        let mut employee = uow
            .employees()
            .find_by_id(cmd.employee_id)
            .await?
            .ok_or_else(|| employee_not_found(cmd.employee_id))?;

        employee.apply_update(cmd.update)?;
        uow.employees().update(&employee).await?;
        uow.commit().await?;

        Ok(employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{seed_employee, seed_role, store};
    use crate::domain::foundation::{ErrorCode, RoleId};

    #[tokio::test]
    async fn updates_department_and_role() {
        let (_, store) = store();
        let role = seed_role(store.as_ref(), "Lead", &[]).await;
        let emp = seed_employee(store.as_ref(), "EMP001", None, &[]).await;

        let updated = UpdateEmployeeHandler::new(store)
            .handle(UpdateEmployeeCommand {
                employee_id: emp,
                update: EmployeeUpdate {
                    department: Some("Data".to_string()),
                    role_id: Some(Some(role)),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.department.as_deref(), Some("Data"));
        assert_eq!(updated.role_id, Some(role));
    }

    #[tokio::test]
    async fn unknown_role_is_rejected() {
        let (_, store) = store();
        let emp = seed_employee(store.as_ref(), "EMP001", None, &[]).await;

        let err = UpdateEmployeeHandler::new(store)
            .handle(UpdateEmployeeCommand {
                employee_id: emp,
                update: EmployeeUpdate {
                    role_id: Some(Some(RoleId::new())),
                    ..Default::default()
                },
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RoleNotFound);
    }

    #[tokio::test]
    async fn email_taken_by_another_employee_conflicts() {
        let (_, store) = store();
        seed_employee(store.as_ref(), "EMP001", None, &[]).await;
        let second = seed_employee(store.as_ref(), "EMP002", None, &[]).await;

        let err = UpdateEmployeeHandler::new(store)
            .handle(UpdateEmployeeCommand {
                employee_id: second,
                update: EmployeeUpdate {
                    email: Some("emp001@example.com".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmployeeExists);
    }

    #[tokio::test]
    async fn unknown_employee_is_not_found() {
        let (_, store) = store();
        let err = UpdateEmployeeHandler::new(store)
            .handle(UpdateEmployeeCommand {
                employee_id: EmployeeId::new(),
                update: EmployeeUpdate::default(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);
    }
}
