//! Employee read handlers: single employee with skills, and skill listing.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EmployeeId, ProficiencyLevel, Timestamp};
use crate::domain::workforce::{Employee, Role, Skill};
use crate::ports::{UnitOfWork, WorkforceStore};

use super::super::employee_not_found;

/// A skill together with the employee's assessed level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessedSkill {
    pub skill: Skill,
    pub proficiency_level: ProficiencyLevel,
    pub assessed_date: Timestamp,
}

/// Employee with role and assessed skills.
#[derive(Debug, Clone)]
pub struct EmployeeView {
    pub employee: Employee,
    pub role: Option<Role>,
    pub skills: Vec<AssessedSkill>,
}

#[derive(Debug, Clone)]
pub struct GetEmployeeQuery {
    pub employee_id: EmployeeId,
}

pub struct GetEmployeeHandler {
    store: Arc<dyn WorkforceStore>,
}

impl GetEmployeeHandler {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetEmployeeQuery) -> Result<EmployeeView, DomainError> {
        let mut uow = self.store.begin().await?;

        let employee = uow
            .employees()
            .find_by_id(query.employee_id)
            .await?
            .ok_or_else(|| employee_not_found(query.employee_id))?;

        let role = match employee.role_id {
            Some(role_id) => uow.roles().find_by_id(role_id).await?,
            None => None,
        };
        let skills = assessed_skills(uow.as_mut(), employee.id).await?;

        Ok(EmployeeView {
            employee,
            role,
            skills,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ListEmployeeSkillsQuery {
    pub employee_id: EmployeeId,
}

pub struct ListEmployeeSkillsHandler {
    store: Arc<dyn WorkforceStore>,
}

impl ListEmployeeSkillsHandler {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: ListEmployeeSkillsQuery,
    ) -> Result<Vec<AssessedSkill>, DomainError> {
        let mut uow = self.store.begin().await?;
        uow.employees()
            .find_by_id(query.employee_id)
            .await?
            .ok_or_else(|| employee_not_found(query.employee_id))?;

        assessed_skills(uow.as_mut(), query.employee_id).await
    }
}

async fn assessed_skills(
    uow: &mut dyn UnitOfWork,
    employee_id: EmployeeId,
) -> Result<Vec<AssessedSkill>, DomainError> {
    let mut skills = Vec::new();
    for assessed in uow.employees().list_skills(employee_id).await? {
        // Skills are deleted together with their assessments
        if let Some(skill) = uow.skills().find_by_id(assessed.skill_id).await? {
            skills.push(AssessedSkill {
                skill,
                proficiency_level: assessed.proficiency_level,
                assessed_date: assessed.assessed_date,
            });
        }
    }
    Ok(skills)
}
