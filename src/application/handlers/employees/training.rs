//! Training history handlers.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EmployeeId};
use crate::domain::workforce::{NewTrainingRecord, TrainingRecord};
use crate::ports::WorkforceStore;

use super::super::employee_not_found;

#[derive(Debug, Clone)]
pub struct RecordTrainingCommand {
    pub details: NewTrainingRecord,
}

pub struct RecordTrainingHandler {
    store: Arc<dyn WorkforceStore>,
}

impl RecordTrainingHandler {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: RecordTrainingCommand) -> Result<TrainingRecord, DomainError> {
        let record = TrainingRecord::create(cmd.details)?;

        let mut uow = self.store.begin().await?;
        uow.training_records().insert(&record).await?;
        uow.commit().await?;

        Ok(record)
    }
}

#[derive(Debug, Clone)]
pub struct ListTrainingQuery {
    pub employee_id: EmployeeId,
}

pub struct ListTrainingHandler {
    store: Arc<dyn WorkforceStore>,
}

impl ListTrainingHandler {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListTrainingQuery) -> Result<Vec<TrainingRecord>, DomainError> {
        let mut uow = self.store.begin().await?;
        uow.employees()
            .find_by_id(query.employee_id)
            .await?
            .ok_or_else(|| employee_not_found(query.employee_id))?;

        uow.training_records()
            .list_for_employee(query.employee_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{seed_employee, seed_skill, store};
    use crate::domain::foundation::{ErrorCode, SkillId};
    use crate::domain::workforce::CompletionStatus;
    use chrono::NaiveDate;

    fn details(employee_id: EmployeeId, skill_id: SkillId, start: (i32, u32, u32)) -> NewTrainingRecord {
        NewTrainingRecord {
            employee_id,
            skill_id,
            training_name: "SQL Deep Dive".to_string(),
            training_provider: None,
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2),
            end_date: None,
            completion_status: CompletionStatus::InProgress,
            effectiveness_score: None,
        }
    }

    #[tokio::test]
    async fn records_and_lists_most_recent_first() {
        let (_, store) = store();
        let sql = seed_skill(store.as_ref(), "SQL", "Technical").await;
        let emp = seed_employee(store.as_ref(), "EMP001", None, &[]).await;
        let record = RecordTrainingHandler::new(store.clone());
        record
            .handle(RecordTrainingCommand {
                details: details(emp, sql, (2023, 1, 10)),
            })
            .await
            .unwrap();
        let latest = record
            .handle(RecordTrainingCommand {
                details: details(emp, sql, (2024, 6, 1)),
            })
            .await
            .unwrap();

        let history = ListTrainingHandler::new(store)
            .handle(ListTrainingQuery { employee_id: emp })
            .await
            .unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, latest.id);
    }

    #[tokio::test]
    async fn unknown_employee_is_not_found() {
        let (_, store) = store();
        let sql = seed_skill(store.as_ref(), "SQL", "Technical").await;

        let err = RecordTrainingHandler::new(store.clone())
            .handle(RecordTrainingCommand {
                details: details(EmployeeId::new(), sql, (2024, 1, 1)),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);

        let err = ListTrainingHandler::new(store)
            .handle(ListTrainingQuery {
                employee_id: EmployeeId::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);
    }
}
