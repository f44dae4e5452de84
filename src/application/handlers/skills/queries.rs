//! Skill catalogue query handlers.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SkillId};
use crate::domain::workforce::Skill;
use crate::ports::WorkforceStore;

use super::super::skill_not_found;

#[derive(Debug, Clone)]
pub struct GetSkillQuery {
    pub skill_id: SkillId,
}

pub struct GetSkillHandler {
    store: Arc<dyn WorkforceStore>,
}

impl GetSkillHandler {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetSkillQuery) -> Result<Skill, DomainError> {
        let mut uow = self.store.begin().await?;
        uow.skills()
            .find_by_id(query.skill_id)
            .await?
            .ok_or_else(|| skill_not_found(query.skill_id))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListSkillsQuery {
    pub category: Option<String>,
}

pub struct ListSkillsHandler {
    store: Arc<dyn WorkforceStore>,
}

impl ListSkillsHandler {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListSkillsQuery) -> Result<Vec<Skill>, DomainError> {
        let mut uow = self.store.begin().await?;
        uow.skills().list(query.category.as_deref()).await
    }

    /// Distinct categories in use, sorted.
    pub async fn categories(&self) -> Result<Vec<String>, DomainError> {
        let mut uow = self.store.begin().await?;
        uow.skills().categories().await
    }
}
