//! GetEmployeeGapsHandler - Query handler for an employee's stored gaps.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EmployeeId};
use crate::domain::gap_analysis::{GapDetails, GapRecordFilter, Priority};
use crate::domain::workforce::Employee;
use crate::ports::WorkforceStore;

use super::super::employee_not_found;

/// Query for the stored gap records of one employee.
#[derive(Debug, Clone)]
pub struct GetEmployeeGapsQuery {
    pub employee_id: EmployeeId,
}

/// Stored records plus summary counts.
#[derive(Debug, Clone)]
pub struct EmployeeGapsResult {
    pub employee: Employee,
    /// All records, including those with no deficit.
    pub gaps: Vec<GapDetails>,
    /// Records with `gap_score < 0`.
    pub total_gaps: usize,
    pub high_priority_gaps: usize,
}

/// Handler for reading stored gaps. Does not recompute anything.
pub struct GetEmployeeGapsHandler {
    store: Arc<dyn WorkforceStore>,
}

impl GetEmployeeGapsHandler {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetEmployeeGapsQuery) -> Result<EmployeeGapsResult, DomainError> {
        let mut uow = self.store.begin().await?;

        let employee = uow
            .employees()
            .find_by_id(query.employee_id)
            .await?
            .ok_or_else(|| employee_not_found(query.employee_id))?;

        let gaps = uow
            .gap_records()
            .list(&GapRecordFilter::for_employee(employee.id))
            .await?;

        let total_gaps = gaps.iter().filter(|d| d.record.gap.is_deficit()).count();
        let high_priority_gaps = gaps
            .iter()
            .filter(|d| d.record.gap.priority == Priority::High)
            .count();

        Ok(EmployeeGapsResult {
            employee,
            gaps,
            total_gaps,
            high_priority_gaps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::gap_analysis::{
        AnalyzeSkillGapsCommand, AnalyzeSkillGapsHandler,
    };
    use crate::application::handlers::test_support::{
        seed_employee, seed_role, seed_skill, store,
    };
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn returns_records_with_counts() {
        let (_, store) = store();
        let python = seed_skill(store.as_ref(), "Python", "Technical").await;
        let sql = seed_skill(store.as_ref(), "SQL", "Technical").await;
        let excel = seed_skill(store.as_ref(), "Excel", "Tools").await;
        let role = seed_role(
            store.as_ref(),
            "Analyst",
            &[(python, 5), (sql, 3), (excel, 2)],
        )
        .await;
        let emp = seed_employee(
            store.as_ref(),
            "EMP001",
            Some(role),
            &[(python, 2), (sql, 2), (excel, 4)],
        )
        .await;
        AnalyzeSkillGapsHandler::new(store.clone())
            .handle(AnalyzeSkillGapsCommand { employee_id: Some(emp) })
            .await
            .unwrap();

        let result = GetEmployeeGapsHandler::new(store)
            .handle(GetEmployeeGapsQuery { employee_id: emp })
            .await
            .unwrap();

        assert_eq!(result.gaps.len(), 3);
        assert_eq!(result.total_gaps, 2);
        assert_eq!(result.high_priority_gaps, 1);
        assert_eq!(result.employee.employee_code, "EMP001");
        // Ordered by skill name
        assert_eq!(result.gaps[0].skill_name, "Excel");
        assert_eq!(result.gaps[0].skill_category.as_deref(), Some("Tools"));
    }

    #[tokio::test]
    async fn employee_never_analyzed_has_no_records() {
        let (_, store) = store();
        let emp = seed_employee(store.as_ref(), "EMP001", None, &[]).await;

        let result = GetEmployeeGapsHandler::new(store)
            .handle(GetEmployeeGapsQuery { employee_id: emp })
            .await
            .unwrap();

        assert!(result.gaps.is_empty());
        assert_eq!(result.total_gaps, 0);
    }

    #[tokio::test]
    async fn unknown_employee_is_not_found() {
        let (_, store) = store();
        let err = GetEmployeeGapsHandler::new(store)
            .handle(GetEmployeeGapsQuery {
                employee_id: EmployeeId::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);
    }
}
