//! PostgreSQL implementation of SkillRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, SkillId, Timestamp};
use crate::domain::workforce::Skill;
use crate::ports::SkillRepository;

use super::errors::map_db_error;
use super::workforce_store::PostgresUnitOfWork;

#[derive(Debug, sqlx::FromRow)]
struct SkillRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    category: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<SkillRow> for Skill {
    fn from(row: SkillRow) -> Self {
        Skill {
            id: SkillId::from_uuid(row.id),
            name: row.name,
            description: row.description,
            category: row.category,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

#[async_trait]
impl SkillRepository for PostgresUnitOfWork {
    async fn insert(&mut self, skill: &Skill) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO skills (id, name, description, category, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(skill.id.as_uuid())
        .bind(&skill.name)
        .bind(&skill.description)
        .bind(&skill.category)
        .bind(skill.created_at.as_datetime())
        .execute(&mut *self.tx)
        .await
        .map_err(|e| map_db_error("Failed to insert skill", e))?;

        Ok(())
    }

    async fn update(&mut self, skill: &Skill) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE skills SET name = $2, description = $3, category = $4 WHERE id = $1",
        )
        .bind(skill.id.as_uuid())
        .bind(&skill.name)
        .bind(&skill.description)
        .bind(&skill.category)
        .execute(&mut *self.tx)
        .await
        .map_err(|e| map_db_error("Failed to update skill", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SkillNotFound,
                format!("Skill not found: {}", skill.id),
            ));
        }
        Ok(())
    }

    async fn find_by_id(&mut self, id: SkillId) -> Result<Option<Skill>, DomainError> {
        let row: Option<SkillRow> = sqlx::query_as(
            "SELECT id, name, description, category, created_at FROM skills WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(|e| map_db_error("Failed to fetch skill", e))?;

        Ok(row.map(Skill::from))
    }

    async fn find_by_name(&mut self, name: &str) -> Result<Option<Skill>, DomainError> {
        let row: Option<SkillRow> = sqlx::query_as(
            "SELECT id, name, description, category, created_at FROM skills WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(|e| map_db_error("Failed to fetch skill", e))?;

        Ok(row.map(Skill::from))
    }

    async fn list(&mut self, category: Option<&str>) -> Result<Vec<Skill>, DomainError> {
        let rows: Vec<SkillRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, category, created_at FROM skills
            WHERE ($1::text IS NULL OR category = $1)
            ORDER BY name
            "#,
        )
        .bind(category)
        .fetch_all(&mut *self.tx)
        .await
        .map_err(|e| map_db_error("Failed to list skills", e))?;

        Ok(rows.into_iter().map(Skill::from).collect())
    }

    async fn categories(&mut self) -> Result<Vec<String>, DomainError> {
        sqlx::query_scalar(
            "SELECT DISTINCT category FROM skills WHERE category IS NOT NULL ORDER BY category",
        )
        .fetch_all(&mut *self.tx)
        .await
        .map_err(|e| map_db_error("Failed to list skill categories", e))
    }

    async fn delete(&mut self, id: SkillId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&mut *self.tx)
            .await
            .map_err(|e| map_db_error("Failed to delete skill", e))?;

        Ok(result.rows_affected() > 0)
    }
}
