//! AssignSkillHandler - Records an employee's proficiency in a new skill.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{DomainError, EmployeeId, ProficiencyLevel, SkillId};
use crate::domain::workforce::EmployeeSkill;
use crate::ports::WorkforceStore;

use super::super::{employee_not_found, skill_not_found};

/// Command to assign a skill. The level defaults to 1 when not given.
#[derive(Debug, Clone)]
pub struct AssignSkillCommand {
    pub employee_id: EmployeeId,
    pub skill_id: SkillId,
    pub proficiency_level: Option<ProficiencyLevel>,
}

pub struct AssignSkillHandler {
    store: Arc<dyn WorkforceStore>,
}

impl AssignSkillHandler {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: AssignSkillCommand) -> Result<EmployeeSkill, DomainError> {
        let mut uow = self.store.begin().await?;

        uow.employees()
            .find_by_id(cmd.employee_id)
            .await?
            .ok_or_else(|| employee_not_found(cmd.employee_id))?;
        uow.skills()
            .find_by_id(cmd.skill_id)
            .await?
            .ok_or_else(|| skill_not_found(cmd.skill_id))?;

        let assessed = EmployeeSkill::assessed_now(
            cmd.employee_id,
            cmd.skill_id,
            cmd.proficiency_level
                .unwrap_or(ProficiencyLevel::DEFAULT_ASSESSED),
        );
        uow.employees().assign_skill(&assessed).await?;
        uow.commit().await?;

        debug!(
            employee_id = %assessed.employee_id,
            skill_id = %assessed.skill_id,
            level = assessed.proficiency_level.value(),
            "Skill assigned"
        );
        Ok(assessed)
    }
}
