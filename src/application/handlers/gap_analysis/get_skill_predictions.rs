//! GetSkillPredictionsHandler - Query handler for training predictions.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EmployeeId};
use crate::domain::gap_analysis::{GapRecordFilter, PredictionEngine, PredictionReport};
use crate::domain::workforce::Employee;
use crate::ports::WorkforceStore;

use super::super::employee_not_found;

#[derive(Debug, Clone)]
pub struct GetSkillPredictionsQuery {
    pub employee_id: EmployeeId,
}

#[derive(Debug, Clone)]
pub struct SkillPredictionsResult {
    pub employee: Employee,
    pub report: PredictionReport,
}

/// Predicts training effort for an employee's stored deficits.
pub struct GetSkillPredictionsHandler {
    store: Arc<dyn WorkforceStore>,
    engine: PredictionEngine,
}

impl GetSkillPredictionsHandler {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self::with_engine(store, PredictionEngine::default())
    }

    pub fn with_engine(store: Arc<dyn WorkforceStore>, engine: PredictionEngine) -> Self {
        Self { store, engine }
    }

    pub async fn handle(
        &self,
        query: GetSkillPredictionsQuery,
    ) -> Result<SkillPredictionsResult, DomainError> {
        let mut uow = self.store.begin().await?;

        let employee = uow
            .employees()
            .find_by_id(query.employee_id)
            .await?
            .ok_or_else(|| employee_not_found(query.employee_id))?;

        let deficits = uow
            .gap_records()
            .list(&GapRecordFilter {
                employee_id: Some(employee.id),
                priority: None,
                deficits_only: true,
            })
            .await?;

        Ok(SkillPredictionsResult {
            employee,
            report: self.engine.predict(&deficits),
        })
    }
}
