//! CreateEmployeeHandler - Command handler for registering employees.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::foundation::{DomainError, RoleId};
use crate::domain::workforce::{Employee, NewEmployee};
use crate::ports::WorkforceStore;

/// Command to create a new employee.
#[derive(Debug, Clone)]
pub struct CreateEmployeeCommand {
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Option<String>,
    pub role_id: Option<RoleId>,
    pub hire_date: Option<NaiveDate>,
}

/// Handler for creating employees.
pub struct CreateEmployeeHandler {
    store: Arc<dyn WorkforceStore>,
}

impl CreateEmployeeHandler {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CreateEmployeeCommand) -> Result<Employee, DomainError> {
        let employee = Employee::create(NewEmployee {
            employee_code: cmd.employee_code,
            first_name: cmd.first_name,
            last_name: cmd.last_name,
            email: cmd.email,
            department: cmd.department,
            role_id: cmd.role_id,
            hire_date: cmd.hire_date,
        })?;

        let mut uow = self.store.begin().await?;
        uow.employees().insert(&employee).await?;
        uow.commit().await?;

        info!(
            employee_id = %employee.id,
            employee_code = %employee.employee_code,
            "Employee created"
        );
        Ok(employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{seed_role, store};
    use crate::domain::foundation::ErrorCode;

    fn command(code: &str, email: &str) -> CreateEmployeeCommand {
        CreateEmployeeCommand {
            employee_code: code.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            department: Some("Engineering".to_string()),
            role_id: None,
            hire_date: NaiveDate::from_ymd_opt(2020, 1, 15),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Cases
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn creates_employee_with_role() {
        let (_, store) = store();
        let role = seed_role(store.as_ref(), "Engineer", &[]).await;
        let mut cmd = command("EMP001", "ada@example.com");
        cmd.role_id = Some(role);

        let employee = CreateEmployeeHandler::new(store.clone()).handle(cmd).await.unwrap();

        let mut uow = store.begin().await.unwrap();
        let stored = uow.employees().find_by_id(employee.id).await.unwrap().unwrap();
        assert_eq!(stored.role_id, Some(role));
        assert_eq!(stored.employee_code, "EMP001");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Cases
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn duplicate_code_conflicts() {
        let (_, store) = store();
        let handler = CreateEmployeeHandler::new(store);
        handler.handle(command("EMP001", "a@example.com")).await.unwrap();

        let err = handler
            .handle(command("EMP001", "b@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmployeeExists);
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let (_, store) = store();
        let handler = CreateEmployeeHandler::new(store);
        handler.handle(command("EMP001", "a@example.com")).await.unwrap();

        let err = handler
            .handle(command("EMP002", "a@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmployeeExists);
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let (_, store) = store();
        let mut cmd = command("EMP001", "a@example.com");
        cmd.first_name = String::new();

        let err = CreateEmployeeHandler::new(store).handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyField);
    }

    #[tokio::test]
    async fn unknown_role_is_not_found() {
        let (_, store) = store();
        let mut cmd = command("EMP001", "a@example.com");
        cmd.role_id = Some(RoleId::new());

        let err = CreateEmployeeHandler::new(store).handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RoleNotFound);
    }
}
