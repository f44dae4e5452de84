//! Skill catalogue command handlers.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, SkillId};
use crate::domain::workforce::{Skill, SkillUpdate};
use crate::ports::WorkforceStore;

use super::super::skill_not_found;

// ════════════════════════════════════════════════════════════════════════════════
// Create
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct CreateSkillCommand {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
}

pub struct CreateSkillHandler {
    store: Arc<dyn WorkforceStore>,
}

impl CreateSkillHandler {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CreateSkillCommand) -> Result<Skill, DomainError> {
        let skill = Skill::create(cmd.name, cmd.description, cmd.category)?;

        let mut uow = self.store.begin().await?;
        uow.skills().insert(&skill).await?;
        uow.commit().await?;

        info!(skill_id = %skill.id, name = %skill.name, "Skill created");
        Ok(skill)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Update
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct UpdateSkillCommand {
    pub skill_id: SkillId,
    pub update: SkillUpdate,
}

pub struct UpdateSkillHandler {
    store: Arc<dyn WorkforceStore>,
}

impl UpdateSkillHandler {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: UpdateSkillCommand) -> Result<Skill, DomainError> {
        let mut uow = self.store.begin().await?;

        let mut skill = uow
            .skills()
            .find_by_id(cmd.skill_id)
            .await?
            .ok_or_else(|| skill_not_found(cmd.skill_id))?;
        skill.apply_update(cmd.update)?;

        uow.skills().update(&skill).await?;
        uow.commit().await?;
        Ok(skill)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Delete
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct DeleteSkillCommand {
    pub skill_id: SkillId,
}

/// Deletes a skill along with assessments, requirements, gap records and
/// training that reference it.
pub struct DeleteSkillHandler {
    store: Arc<dyn WorkforceStore>,
}

impl DeleteSkillHandler {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteSkillCommand) -> Result<(), DomainError> {
        let mut uow = self.store.begin().await?;
        if !uow.skills().delete(cmd.skill_id).await? {
            return Err(skill_not_found(cmd.skill_id));
        }
        uow.commit().await?;

        info!(skill_id = %cmd.skill_id, "Skill deleted");
        Ok(())
    }
}
