//! PostgreSQL implementation of RoleRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::foundation::{
    DomainError, ErrorCode, ProficiencyLevel, RoleId, SkillId, Timestamp,
};
use crate::domain::workforce::{Role, RoleSkillRequirement};
use crate::ports::RoleRepository;

use super::errors::{corrupt_row, map_db_error};
use super::workforce_store::PostgresUnitOfWork;

#[derive(Debug, sqlx::FromRow)]
struct RoleRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    department: Option<String>,
    level: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<RoleRow> for Role {
    fn from(row: RoleRow) -> Self {
        Role {
            id: RoleId::from_uuid(row.id),
            title: row.title,
            description: row.description,
            department: row.department,
            level: row.level,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct RequirementRow {
    role_id: Uuid,
    skill_id: Uuid,
    required_level: i32,
}

impl TryFrom<RequirementRow> for RoleSkillRequirement {
    type Error = DomainError;

    fn try_from(row: RequirementRow) -> Result<Self, Self::Error> {
        let level = ProficiencyLevel::try_new(row.required_level)
            .map_err(|e| corrupt_row("required_level", e))?;
        Ok(RoleSkillRequirement::new(
            RoleId::from_uuid(row.role_id),
            SkillId::from_uuid(row.skill_id),
            level,
        ))
    }
}

const ROLE_COLUMNS: &str = "id, title, description, department, level, created_at";

#[async_trait]
impl RoleRepository for PostgresUnitOfWork {
    async fn insert(&mut self, role: &Role) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO roles (id, title, description, department, level, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(role.id.as_uuid())
        .bind(&role.title)
        .bind(&role.description)
        .bind(&role.department)
        .bind(&role.level)
        .bind(role.created_at.as_datetime())
        .execute(&mut *self.tx)
        .await
        .map_err(|e| map_db_error("Failed to insert role", e))?;

        Ok(())
    }

    async fn find_by_id(&mut self, id: RoleId) -> Result<Option<Role>, DomainError> {
        let row: Option<RoleRow> =
            sqlx::query_as(&format!("SELECT {} FROM roles WHERE id = $1", ROLE_COLUMNS))
                .bind(id.as_uuid())
                .fetch_optional(&mut *self.tx)
                .await
                .map_err(|e| map_db_error("Failed to fetch role", e))?;

        Ok(row.map(Role::from))
    }

    async fn find_by_title(&mut self, title: &str) -> Result<Option<Role>, DomainError> {
        let row: Option<RoleRow> = sqlx::query_as(&format!(
            "SELECT {} FROM roles WHERE title = $1 ORDER BY created_at LIMIT 1",
            ROLE_COLUMNS
        ))
        .bind(title)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(|e| map_db_error("Failed to fetch role", e))?;

        Ok(row.map(Role::from))
    }

    async fn list(&mut self) -> Result<Vec<Role>, DomainError> {
        let rows: Vec<RoleRow> =
            sqlx::query_as(&format!("SELECT {} FROM roles ORDER BY title", ROLE_COLUMNS))
                .fetch_all(&mut *self.tx)
                .await
                .map_err(|e| map_db_error("Failed to list roles", e))?;

        Ok(rows.into_iter().map(Role::from).collect())
    }

    async fn requirements(
        &mut self,
        role_id: RoleId,
    ) -> Result<Vec<RoleSkillRequirement>, DomainError> {
        let rows: Vec<RequirementRow> = sqlx::query_as(
            r#"
            SELECT role_id, skill_id, required_level FROM role_skills
            WHERE role_id = $1
            ORDER BY position
            "#,
        )
        .bind(role_id.as_uuid())
        .fetch_all(&mut *self.tx)
        .await
        .map_err(|e| map_db_error("Failed to fetch role requirements", e))?;

        rows.into_iter().map(RoleSkillRequirement::try_from).collect()
    }

    async fn replace_requirements(
        &mut self,
        role_id: RoleId,
        requirements: &[RoleSkillRequirement],
    ) -> Result<(), DomainError> {
        let exists: Option<Uuid> = sqlx::query_scalar("SELECT id FROM roles WHERE id = $1 FOR UPDATE")
            .bind(role_id.as_uuid())
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(|e| map_db_error("Failed to lock role", e))?;
        if exists.is_none() {
            return Err(DomainError::new(
                ErrorCode::RoleNotFound,
                format!("Role not found: {}", role_id),
            ));
        }

        sqlx::query("DELETE FROM role_skills WHERE role_id = $1")
            .bind(role_id.as_uuid())
            .execute(&mut *self.tx)
            .await
            .map_err(|e| map_db_error("Failed to clear role requirements", e))?;

        for (position, requirement) in requirements.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO role_skills (role_id, skill_id, required_level, position)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(role_id.as_uuid())
            .bind(requirement.skill_id.as_uuid())
            .bind(requirement.required_level.value())
            .bind(position as i32)
            .execute(&mut *self.tx)
            .await
            .map_err(|e| map_db_error("Failed to insert role requirement", e))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirement_row(required_level: i32) -> RequirementRow {
        RequirementRow {
            role_id: Uuid::new_v4(),
            skill_id: Uuid::new_v4(),
            required_level,
        }
    }

    #[test]
    fn requirement_row_converts() {
        let row = requirement_row(3);
        let skill_id = row.skill_id;

        let requirement = RoleSkillRequirement::try_from(row).unwrap();
        assert_eq!(requirement.skill_id, SkillId::from_uuid(skill_id));
        assert_eq!(requirement.required_level, ProficiencyLevel::DEFAULT_REQUIRED);
    }

    #[test]
    fn invalid_required_level_is_a_database_error() {
        let err = RoleSkillRequirement::try_from(requirement_row(9)).unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
