//! Role query handlers.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ProficiencyLevel, RoleId};
use crate::domain::workforce::{Role, Skill};
use crate::ports::{UnitOfWork, WorkforceStore};

use super::super::{role_not_found, skill_not_found};

/// A required skill with its minimum level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredSkill {
    pub skill: Skill,
    pub required_level: ProficiencyLevel,
}

/// Role with its requirements in declared order.
#[derive(Debug, Clone)]
pub struct RoleView {
    pub role: Role,
    pub requirements: Vec<RequiredSkill>,
}

pub(super) async fn load_role_view(
    uow: &mut dyn UnitOfWork,
    role_id: RoleId,
) -> Result<RoleView, DomainError> {
    let role = uow
        .roles()
        .find_by_id(role_id)
        .await?
        .ok_or_else(|| role_not_found(role_id))?;

    let mut requirements = Vec::new();
    for requirement in uow.roles().requirements(role_id).await? {
        let skill = uow
            .skills()
            .find_by_id(requirement.skill_id)
            .await?
            .ok_or_else(|| skill_not_found(requirement.skill_id))?;
        requirements.push(RequiredSkill {
            skill,
            required_level: requirement.required_level,
        });
    }

    Ok(RoleView { role, requirements })
}

#[derive(Debug, Clone)]
pub struct GetRoleQuery {
    pub role_id: RoleId,
}

pub struct GetRoleHandler {
    store: Arc<dyn WorkforceStore>,
}

impl GetRoleHandler {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetRoleQuery) -> Result<RoleView, DomainError> {
        let mut uow = self.store.begin().await?;
        load_role_view(uow.as_mut(), query.role_id).await
    }
}

pub struct ListRolesHandler {
    store: Arc<dyn WorkforceStore>,
}

impl ListRolesHandler {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<Role>, DomainError> {
        let mut uow = self.store.begin().await?;
        uow.roles().list().await
    }
}
