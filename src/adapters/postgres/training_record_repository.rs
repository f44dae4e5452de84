//! PostgreSQL implementation of TrainingRecordRepository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::foundation::{
    DomainError, EmployeeId, SkillId, Timestamp, TrainingRecordId,
};
use crate::domain::workforce::TrainingRecord;
use crate::ports::TrainingRecordRepository;

use super::errors::{corrupt_row, map_db_error};
use super::workforce_store::PostgresUnitOfWork;

#[derive(Debug, sqlx::FromRow)]
struct TrainingRow {
    id: Uuid,
    employee_id: Uuid,
    skill_id: Uuid,
    training_name: String,
    training_provider: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    completion_status: String,
    effectiveness_score: Option<f64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<TrainingRow> for TrainingRecord {
    type Error = DomainError;

    fn try_from(row: TrainingRow) -> Result<Self, Self::Error> {
        Ok(TrainingRecord {
            id: TrainingRecordId::from_uuid(row.id),
            employee_id: EmployeeId::from_uuid(row.employee_id),
            skill_id: SkillId::from_uuid(row.skill_id),
            training_name: row.training_name,
            training_provider: row.training_provider,
            start_date: row.start_date,
            end_date: row.end_date,
            completion_status: row
                .completion_status
                .parse()
                .map_err(|e| corrupt_row("completion_status", e))?,
            effectiveness_score: row.effectiveness_score,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

#[async_trait]
impl TrainingRecordRepository for PostgresUnitOfWork {
    async fn insert(&mut self, record: &TrainingRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO training_records (
                id, employee_id, skill_id, training_name, training_provider,
                start_date, end_date, completion_status, effectiveness_score, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.employee_id.as_uuid())
        .bind(record.skill_id.as_uuid())
        .bind(&record.training_name)
        .bind(&record.training_provider)
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(record.completion_status.as_str())
        .bind(record.effectiveness_score)
        .bind(record.created_at.as_datetime())
        .execute(&mut *self.tx)
        .await
        .map_err(|e| map_db_error("Failed to insert training record", e))?;

        Ok(())
    }

    async fn list_for_employee(
        &mut self,
        employee_id: EmployeeId,
    ) -> Result<Vec<TrainingRecord>, DomainError> {
        let rows: Vec<TrainingRow> = sqlx::query_as(
            r#"
            SELECT id, employee_id, skill_id, training_name, training_provider,
                   start_date, end_date, completion_status, effectiveness_score, created_at
            FROM training_records
            WHERE employee_id = $1
            ORDER BY start_date DESC NULLS LAST, created_at DESC
            "#,
        )
        .bind(employee_id.as_uuid())
        .fetch_all(&mut *self.tx)
        .await
        .map_err(|e| map_db_error("Failed to list training records", e))?;

        rows.into_iter().map(TrainingRecord::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::workforce::CompletionStatus;

    fn row(completion_status: &str) -> TrainingRow {
        TrainingRow {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            skill_id: Uuid::new_v4(),
            training_name: "SQL Fundamentals".to_string(),
            training_provider: None,
            start_date: None,
            end_date: None,
            completion_status: completion_status.to_string(),
            effectiveness_score: Some(8.5),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn stored_statuses_round_trip() {
        for status in [
            CompletionStatus::InProgress,
            CompletionStatus::Completed,
            CompletionStatus::Cancelled,
        ] {
            let record = TrainingRecord::try_from(row(status.as_str())).unwrap();
            assert_eq!(record.completion_status, status);
        }
    }

    #[test]
    fn unknown_status_is_a_database_error() {
        let err = TrainingRecord::try_from(row("Abandoned")).unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
