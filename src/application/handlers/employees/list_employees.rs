//! ListEmployeesHandler - Query handler for filtered employee listings.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::workforce::{Employee, EmployeeFilter};
use crate::ports::WorkforceStore;

#[derive(Debug, Clone, Default)]
pub struct ListEmployeesQuery {
    pub filter: EmployeeFilter,
}

pub struct ListEmployeesHandler {
    store: Arc<dyn WorkforceStore>,
}

impl ListEmployeesHandler {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListEmployeesQuery) -> Result<Vec<Employee>, DomainError> {
        let mut uow = self.store.begin().await?;
        uow.employees().list(&query.filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{seed_employee, seed_role, store};

    #[tokio::test]
    async fn filters_by_role() {
        let (_, store) = store();
        let role = seed_role(store.as_ref(), "Engineer", &[]).await;
        seed_employee(store.as_ref(), "EMP002", Some(role), &[]).await;
        seed_employee(store.as_ref(), "EMP001", None, &[]).await;
        let handler = ListEmployeesHandler::new(store);

        let all = handler.handle(ListEmployeesQuery::default()).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].employee_code, "EMP001");

        let engineers = handler
            .handle(ListEmployeesQuery {
                filter: EmployeeFilter {
                    department: None,
                    role_id: Some(role),
                },
            })
            .await
            .unwrap();
        assert_eq!(engineers.len(), 1);
        assert_eq!(engineers[0].employee_code, "EMP002");
    }

    #[tokio::test]
    async fn unmatched_department_is_empty() {
        let (_, store) = store();
        seed_employee(store.as_ref(), "EMP001", None, &[]).await;

        let result = ListEmployeesHandler::new(store)
            .handle(ListEmployeesQuery {
                filter: EmployeeFilter {
                    department: Some("Sales".to_string()),
                    role_id: None,
                },
            })
            .await
            .unwrap();
        assert!(result.is_empty());
    }
}
