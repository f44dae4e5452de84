//! GenerateRecommendationsHandler - Query handler for training recommendations.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{DomainError, EmployeeId};
use crate::domain::gap_analysis::{
    GapRecordFilter, PriorityFilter, RecommendationEngine, RecommendationReport,
};
use crate::ports::WorkforceStore;

/// Recommendations for one employee, or the whole workforce.
///
/// An unknown `employee_id` yields an empty report rather than an error.
#[derive(Debug, Clone, Default)]
pub struct GenerateRecommendationsCommand {
    pub employee_id: Option<EmployeeId>,
    pub priority: PriorityFilter,
}

pub struct GenerateRecommendationsHandler {
    store: Arc<dyn WorkforceStore>,
}

impl GenerateRecommendationsHandler {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: GenerateRecommendationsCommand,
    ) -> Result<RecommendationReport, DomainError> {
        let mut uow = self.store.begin().await?;

        let filter = GapRecordFilter {
            employee_id: cmd.employee_id,
            priority: match cmd.priority {
                PriorityFilter::All => None,
                PriorityFilter::Only(p) => Some(p),
            },
            deficits_only: true,
        };
        let gaps = uow.gap_records().list(&filter).await?;

        let report = RecommendationEngine::generate(&gaps, cmd.priority);
        debug!(
            recommendations = report.recommendations.len(),
            employees = report.total_employees_needing_training,
            "Generated training recommendations"
        );
        Ok(report)
    }
}
