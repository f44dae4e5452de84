//! PostgreSQL implementation of EmployeeRepository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::foundation::{
    DomainError, EmployeeId, ErrorCode, ProficiencyLevel, RoleId, SkillId, Timestamp,
};
use crate::domain::workforce::{Employee, EmployeeFilter, EmployeeSkill};
use crate::ports::EmployeeRepository;

use super::errors::{corrupt_row, map_db_error};
use super::workforce_store::PostgresUnitOfWork;

const EMPLOYEE_COLUMNS: &str = "id, employee_code, first_name, last_name, email, department, \
                                role_id, hire_date, created_at, updated_at";

#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id: Uuid,
    employee_code: String,
    first_name: String,
    last_name: String,
    email: String,
    department: Option<String>,
    role_id: Option<Uuid>,
    hire_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: EmployeeId::from_uuid(row.id),
            employee_code: row.employee_code,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            department: row.department,
            role_id: row.role_id.map(RoleId::from_uuid),
            hire_date: row.hire_date,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EmployeeSkillRow {
    employee_id: Uuid,
    skill_id: Uuid,
    proficiency_level: i32,
    assessed_date: DateTime<Utc>,
}

impl TryFrom<EmployeeSkillRow> for EmployeeSkill {
    type Error = DomainError;

    fn try_from(row: EmployeeSkillRow) -> Result<Self, Self::Error> {
        Ok(EmployeeSkill {
            employee_id: EmployeeId::from_uuid(row.employee_id),
            skill_id: SkillId::from_uuid(row.skill_id),
            proficiency_level: ProficiencyLevel::try_new(row.proficiency_level)
                .map_err(|e| corrupt_row("proficiency_level", e))?,
            assessed_date: Timestamp::from_datetime(row.assessed_date),
        })
    }
}

#[async_trait]
impl EmployeeRepository for PostgresUnitOfWork {
    async fn insert(&mut self, employee: &Employee) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO employees (
                id, employee_code, first_name, last_name, email, department,
                role_id, hire_date, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(employee.id.as_uuid())
        .bind(&employee.employee_code)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.department)
        .bind(employee.role_id.map(|id| *id.as_uuid()))
        .bind(employee.hire_date)
        .bind(employee.created_at.as_datetime())
        .bind(employee.updated_at.as_datetime())
        .execute(&mut *self.tx)
        .await
        .map_err(|e| map_db_error("Failed to insert employee", e))?;

        Ok(())
    }

    async fn update(&mut self, employee: &Employee) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE employees SET
                first_name = $2,
                last_name = $3,
                email = $4,
                department = $5,
                role_id = $6,
                hire_date = $7,
                updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(employee.id.as_uuid())
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.department)
        .bind(employee.role_id.map(|id| *id.as_uuid()))
        .bind(employee.hire_date)
        .bind(employee.updated_at.as_datetime())
        .execute(&mut *self.tx)
        .await
        .map_err(|e| map_db_error("Failed to update employee", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::EmployeeNotFound,
                format!("Employee not found: {}", employee.id),
            ));
        }
        Ok(())
    }

    async fn find_by_id(&mut self, id: EmployeeId) -> Result<Option<Employee>, DomainError> {
        let row: Option<EmployeeRow> = sqlx::query_as(&format!(
            "SELECT {} FROM employees WHERE id = $1",
            EMPLOYEE_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(|e| map_db_error("Failed to fetch employee", e))?;

        Ok(row.map(Employee::from))
    }

    async fn find_by_code(&mut self, code: &str) -> Result<Option<Employee>, DomainError> {
        let row: Option<EmployeeRow> = sqlx::query_as(&format!(
            "SELECT {} FROM employees WHERE employee_code = $1",
            EMPLOYEE_COLUMNS
        ))
        .bind(code)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(|e| map_db_error("Failed to fetch employee", e))?;

        Ok(row.map(Employee::from))
    }

    async fn list(&mut self, filter: &EmployeeFilter) -> Result<Vec<Employee>, DomainError> {
        let rows: Vec<EmployeeRow> = sqlx::query_as(&format!(
            r#"
            SELECT {} FROM employees
            WHERE ($1::text IS NULL OR department = $1)
              AND ($2::uuid IS NULL OR role_id = $2)
            ORDER BY employee_code
            "#,
            EMPLOYEE_COLUMNS
        ))
        .bind(filter.department.as_deref())
        .bind(filter.role_id.map(|id| *id.as_uuid()))
        .fetch_all(&mut *self.tx)
        .await
        .map_err(|e| map_db_error("Failed to list employees", e))?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn delete(&mut self, id: EmployeeId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&mut *self.tx)
            .await
            .map_err(|e| map_db_error("Failed to delete employee", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn assign_skill(&mut self, skill: &EmployeeSkill) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO employee_skills (employee_id, skill_id, proficiency_level, assessed_date)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(skill.employee_id.as_uuid())
        .bind(skill.skill_id.as_uuid())
        .bind(skill.proficiency_level.value())
        .bind(skill.assessed_date.as_datetime())
        .execute(&mut *self.tx)
        .await
        .map_err(|e| map_db_error("Failed to assign skill", e))?;

        Ok(())
    }

    async fn list_skills(
        &mut self,
        employee_id: EmployeeId,
    ) -> Result<Vec<EmployeeSkill>, DomainError> {
        let rows: Vec<EmployeeSkillRow> = sqlx::query_as(
            r#"
            SELECT es.employee_id, es.skill_id, es.proficiency_level, es.assessed_date
            FROM employee_skills es
            JOIN skills s ON s.id = es.skill_id
            WHERE es.employee_id = $1
            ORDER BY s.name
            "#,
        )
        .bind(employee_id.as_uuid())
        .fetch_all(&mut *self.tx)
        .await
        .map_err(|e| map_db_error("Failed to list employee skills", e))?;

        rows.into_iter().map(EmployeeSkill::try_from).collect()
    }

    async fn proficiency(
        &mut self,
        employee_id: EmployeeId,
        skill_id: SkillId,
    ) -> Result<Option<ProficiencyLevel>, DomainError> {
        let level: Option<i32> = sqlx::query_scalar(
            "SELECT proficiency_level FROM employee_skills WHERE employee_id = $1 AND skill_id = $2",
        )
        .bind(employee_id.as_uuid())
        .bind(skill_id.as_uuid())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(|e| map_db_error("Failed to fetch proficiency", e))?;

        level
            .map(|v| ProficiencyLevel::try_new(v).map_err(|e| corrupt_row("proficiency_level", e)))
            .transpose()
    }
}
