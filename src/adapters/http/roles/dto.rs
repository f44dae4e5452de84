//! HTTP DTOs for role endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::roles::{RequiredSkill, RoleView};
use crate::domain::foundation::{RoleId, SkillId};
use crate::domain::workforce::Role;

/// One `(skill_id, required_level)` pair. The level defaults to 3.
#[derive(Debug, Clone, Deserialize)]
pub struct RequirementRequest {
    pub skill_id: String,
    #[serde(default)]
    pub required_level: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoleRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<RequirementRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetRequirementsRequest {
    pub required_skills: Vec<RequirementRequest>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequiredSkillResponse {
    pub skill_id: SkillId,
    pub skill_name: String,
    pub category: Option<String>,
    pub required_level: i32,
}

impl From<RequiredSkill> for RequiredSkillResponse {
    fn from(required: RequiredSkill) -> Self {
        Self {
            skill_id: required.skill.id,
            skill_name: required.skill.name,
            category: required.skill.category,
            required_level: required.required_level.value(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleResponse {
    pub id: RoleId,
    pub title: String,
    pub description: Option<String>,
    pub department: Option<String>,
    pub level: Option<String>,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_skills: Option<Vec<RequiredSkillResponse>>,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            title: role.title,
            description: role.description,
            department: role.department,
            level: role.level,
            created_at: role.created_at.to_rfc3339(),
            required_skills: None,
        }
    }
}

impl From<RoleView> for RoleResponse {
    fn from(view: RoleView) -> Self {
        Self {
            required_skills: Some(view.requirements.into_iter().map(Into::into).collect()),
            ..Self::from(view.role)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleListResponse {
    pub roles: Vec<RoleResponse>,
    pub count: usize,
}

impl From<Vec<Role>> for RoleListResponse {
    fn from(roles: Vec<Role>) -> Self {
        Self {
            count: roles.len(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }
}
