//! PostgreSQL implementation of GapRecordRepository.
//!
//! Upserts rely on the `skill_gap_records_employee_skill_key` unique
//! constraint, so concurrent analyses of the same pair never produce
//! duplicate rows; the last writer wins.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, EmployeeId, GapRecordId, SkillId, Timestamp};
use crate::domain::gap_analysis::{
    GapDetails, GapRecordFilter, Priority, SkillGap, SkillGapRecord,
};
use crate::ports::GapRecordRepository;

use super::errors::{corrupt_row, map_db_error};
use super::workforce_store::PostgresUnitOfWork;

#[derive(Debug, sqlx::FromRow)]
struct GapDetailsRow {
    id: Uuid,
    employee_id: Uuid,
    skill_id: Uuid,
    current_level: i32,
    required_level: i32,
    gap_score: i32,
    priority: String,
    predicted_training_time: i32,
    analysis_date: DateTime<Utc>,
    first_name: String,
    last_name: String,
    skill_name: String,
    skill_category: Option<String>,
}

impl TryFrom<GapDetailsRow> for GapDetails {
    type Error = DomainError;

    fn try_from(row: GapDetailsRow) -> Result<Self, Self::Error> {
        let priority: Priority = row
            .priority
            .parse()
            .map_err(|e| corrupt_row("priority", e))?;

        Ok(GapDetails {
            record: SkillGapRecord {
                id: GapRecordId::from_uuid(row.id),
                gap: SkillGap {
                    employee_id: EmployeeId::from_uuid(row.employee_id),
                    skill_id: SkillId::from_uuid(row.skill_id),
                    current_level: row.current_level,
                    required_level: row.required_level,
                    gap_score: row.gap_score,
                    priority,
                    predicted_training_time: row.predicted_training_time,
                },
                analysis_date: Timestamp::from_datetime(row.analysis_date),
            },
            employee_name: format!("{} {}", row.first_name, row.last_name),
            skill_name: row.skill_name,
            skill_category: row.skill_category,
        })
    }
}

#[async_trait]
impl GapRecordRepository for PostgresUnitOfWork {
    async fn upsert(&mut self, record: &SkillGapRecord) -> Result<SkillGapRecord, DomainError> {
        let gap = &record.gap;
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO skill_gap_records (
                id, employee_id, skill_id, current_level, required_level,
                gap_score, priority, predicted_training_time, analysis_date
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (employee_id, skill_id) DO UPDATE SET
                current_level = EXCLUDED.current_level,
                required_level = EXCLUDED.required_level,
                gap_score = EXCLUDED.gap_score,
                priority = EXCLUDED.priority,
                predicted_training_time = EXCLUDED.predicted_training_time,
                analysis_date = EXCLUDED.analysis_date
            RETURNING id
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(gap.employee_id.as_uuid())
        .bind(gap.skill_id.as_uuid())
        .bind(gap.current_level)
        .bind(gap.required_level)
        .bind(gap.gap_score)
        .bind(gap.priority.label())
        .bind(gap.predicted_training_time)
        .bind(record.analysis_date.as_datetime())
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| map_db_error("Failed to upsert skill gap record", e))?;

        Ok(SkillGapRecord {
            id: GapRecordId::from_uuid(id),
            ..*record
        })
    }

    async fn list(&mut self, filter: &GapRecordFilter) -> Result<Vec<GapDetails>, DomainError> {
        let rows: Vec<GapDetailsRow> = sqlx::query_as(
            r#"
            SELECT g.id, g.employee_id, g.skill_id, g.current_level, g.required_level,
                   g.gap_score, g.priority, g.predicted_training_time, g.analysis_date,
                   e.first_name, e.last_name,
                   s.name AS skill_name, s.category AS skill_category
            FROM skill_gap_records g
            JOIN employees e ON e.id = g.employee_id
            JOIN skills s ON s.id = g.skill_id
            WHERE ($1::uuid IS NULL OR g.employee_id = $1)
              AND ($2::text IS NULL OR g.priority = $2)
              AND (NOT $3 OR g.gap_score < 0)
            ORDER BY e.employee_code, s.name
            "#,
        )
        .bind(filter.employee_id.map(|id| *id.as_uuid()))
        .bind(filter.priority.map(|p| p.label()))
        .bind(filter.deficits_only)
        .fetch_all(&mut *self.tx)
        .await
        .map_err(|e| map_db_error("Failed to list skill gap records", e))?;

        rows.into_iter().map(GapDetails::try_from).collect()
    }

    async fn delete_for_employee_except(
        &mut self,
        employee_id: EmployeeId,
        keep: &[SkillId],
    ) -> Result<u64, DomainError> {
        let keep: Vec<Uuid> = keep.iter().map(|id| *id.as_uuid()).collect();
        let result = sqlx::query(
            r#"
            DELETE FROM skill_gap_records
            WHERE employee_id = $1 AND NOT (skill_id = ANY($2))
            "#,
        )
        .bind(employee_id.as_uuid())
        .bind(&keep)
        .execute(&mut *self.tx)
        .await
        .map_err(|e| map_db_error("Failed to prune skill gap records", e))?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn row(priority: &str) -> GapDetailsRow {
        GapDetailsRow {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            skill_id: Uuid::new_v4(),
            current_level: 2,
            required_level: 5,
            gap_score: -3,
            priority: priority.to_string(),
            predicted_training_time: 60,
            analysis_date: Utc::now(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            skill_name: "Python".to_string(),
            skill_category: Some("Technical".to_string()),
        }
    }

    #[test]
    fn stored_priority_labels_round_trip() {
        for priority in [Priority::High, Priority::Medium, Priority::Low] {
            let details = GapDetails::try_from(row(priority.label())).unwrap();
            assert_eq!(details.record.gap.priority, priority);
        }
    }

    #[test]
    fn row_maps_ids_names_and_levels() {
        let source = row("High");
        let (id, employee_id, skill_id) = (source.id, source.employee_id, source.skill_id);

        let details = GapDetails::try_from(source).unwrap();

        assert_eq!(*details.record.id.as_uuid(), id);
        assert_eq!(*details.record.gap.employee_id.as_uuid(), employee_id);
        assert_eq!(*details.record.gap.skill_id.as_uuid(), skill_id);
        assert_eq!(details.record.gap.gap_score, -3);
        assert_eq!(details.employee_name, "Ada Lovelace");
        assert_eq!(details.skill_category.as_deref(), Some("Technical"));
    }

    #[test]
    fn unknown_priority_is_a_database_error() {
        let err = GapDetails::try_from(row("Urgent")).unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
