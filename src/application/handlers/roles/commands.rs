//! Role command handlers.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, ProficiencyLevel, RoleId, SkillId};
use crate::domain::workforce::{Role, RoleSkillRequirement};
use crate::ports::WorkforceStore;

use super::super::role_not_found;
use super::queries::{load_role_view, RoleView};

/// One requested requirement. The level defaults to 3.
#[derive(Debug, Clone, Copy)]
pub struct RequirementInput {
    pub skill_id: SkillId,
    pub required_level: Option<ProficiencyLevel>,
}

fn to_requirements(
    role_id: RoleId,
    inputs: &[RequirementInput],
) -> Result<Vec<RoleSkillRequirement>, DomainError> {
    let mut seen = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            if !seen.insert(input.skill_id) {
                return Err(DomainError::validation(
                    "required_skills",
                    format!("Skill {} listed more than once", input.skill_id),
                ));
            }
            Ok(RoleSkillRequirement::new(
                role_id,
                input.skill_id,
                input
                    .required_level
                    .unwrap_or(ProficiencyLevel::DEFAULT_REQUIRED),
            ))
        })
        .collect()
}

// ════════════════════════════════════════════════════════════════════════════════
// Create
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct CreateRoleCommand {
    pub title: String,
    pub description: Option<String>,
    pub department: Option<String>,
    pub level: Option<String>,
    pub requirements: Vec<RequirementInput>,
}

pub struct CreateRoleHandler {
    store: Arc<dyn WorkforceStore>,
}

impl CreateRoleHandler {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CreateRoleCommand) -> Result<RoleView, DomainError> {
        let role = Role::create(cmd.title, cmd.description, cmd.department, cmd.level)?;
        let requirements = to_requirements(role.id, &cmd.requirements)?;

        let mut uow = self.store.begin().await?;
        uow.roles().insert(&role).await?;
        uow.roles()
            .replace_requirements(role.id, &requirements)
            .await?;
        let view = load_role_view(uow.as_mut(), role.id).await?;
        uow.commit().await?;

        info!(
            role_id = %role.id,
            title = %role.title,
            requirements = requirements.len(),
            "Role created"
        );
        Ok(view)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Set Requirements
// ════════════════════════════════════════════════════════════════════════════════

/// Replaces the full requirement set of a role.
#[derive(Debug, Clone)]
pub struct SetRoleRequirementsCommand {
    pub role_id: RoleId,
    pub requirements: Vec<RequirementInput>,
}

pub struct SetRoleRequirementsHandler {
    store: Arc<dyn WorkforceStore>,
}

impl SetRoleRequirementsHandler {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SetRoleRequirementsCommand) -> Result<RoleView, DomainError> {
        let requirements = to_requirements(cmd.role_id, &cmd.requirements)?;

        let mut uow = self.store.begin().await?;
        uow.roles()
            .find_by_id(cmd.role_id)
            .await?
            .ok_or_else(|| role_not_found(cmd.role_id))?;
        uow.roles()
            .replace_requirements(cmd.role_id, &requirements)
            .await?;
        let view = load_role_view(uow.as_mut(), cmd.role_id).await?;
        uow.commit().await?;

        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{level, seed_role, seed_skill, store};
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn creates_role_with_ordered_requirements() {
        let (_, store) = store();
        let sql = seed_skill(store.as_ref(), "SQL", "Technical").await;
        let python = seed_skill(store.as_ref(), "Python", "Technical").await;

        let view = CreateRoleHandler::new(store)
            .handle(CreateRoleCommand {
                title: "Data Analyst".to_string(),
                description: None,
                department: Some("Data".to_string()),
                level: Some("Mid".to_string()),
                requirements: vec![
                    RequirementInput {
                        skill_id: sql,
                        required_level: Some(level(4)),
                    },
                    RequirementInput {
                        skill_id: python,
                        required_level: None,
                    },
                ],
            })
            .await
            .unwrap();

        assert_eq!(view.role.title, "Data Analyst");
        assert_eq!(view.requirements.len(), 2);
        assert_eq!(view.requirements[0].skill.name, "SQL");
        assert_eq!(view.requirements[0].required_level.value(), 4);
        assert_eq!(view.requirements[1].required_level.value(), 3);
    }

    #[tokio::test]
    async fn create_with_unknown_skill_writes_nothing() {
        let (_, store) = store();
        let err = CreateRoleHandler::new(store.clone())
            .handle(CreateRoleCommand {
                title: "Ghost".to_string(),
                description: None,
                department: None,
                level: None,
                requirements: vec![RequirementInput {
                    skill_id: SkillId::new(),
                    required_level: None,
                }],
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SkillNotFound);

        let mut uow = store.begin().await.unwrap();
        assert!(uow.roles().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn replaces_requirements() {
        let (_, store) = store();
        let sql = seed_skill(store.as_ref(), "SQL", "Technical").await;
        let python = seed_skill(store.as_ref(), "Python", "Technical").await;
        let role = seed_role(store.as_ref(), "Analyst", &[(sql, 3)]).await;

        let view = SetRoleRequirementsHandler::new(store)
            .handle(SetRoleRequirementsCommand {
                role_id: role,
                requirements: vec![RequirementInput {
                    skill_id: python,
                    required_level: Some(level(5)),
                }],
            })
            .await
            .unwrap();

        assert_eq!(view.requirements.len(), 1);
        assert_eq!(view.requirements[0].skill.id, python);
    }

    #[tokio::test]
    async fn duplicate_skill_is_rejected() {
        let (_, store) = store();
        let sql = seed_skill(store.as_ref(), "SQL", "Technical").await;
        let role = seed_role(store.as_ref(), "Analyst", &[]).await;
        let input = RequirementInput {
            skill_id: sql,
            required_level: None,
        };

        let err = SetRoleRequirementsHandler::new(store)
            .handle(SetRoleRequirementsCommand {
                role_id: role,
                requirements: vec![input, input],
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn unknown_role_is_not_found() {
        let (_, store) = store();
        let err = SetRoleRequirementsHandler::new(store)
            .handle(SetRoleRequirementsCommand {
                role_id: RoleId::new(),
                requirements: vec![],
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RoleNotFound);
    }
}
