//! HTTP DTOs for skill catalogue endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SkillId;
use crate::domain::workforce::Skill;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSkillRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSkillRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSkillsParams {
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillResponse {
    pub id: SkillId,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub created_at: String,
}

impl From<Skill> for SkillResponse {
    fn from(skill: Skill) -> Self {
        Self {
            id: skill.id,
            name: skill.name,
            description: skill.description,
            category: skill.category,
            created_at: skill.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillListResponse {
    pub skills: Vec<SkillResponse>,
    pub count: usize,
}

impl From<Vec<Skill>> for SkillListResponse {
    fn from(skills: Vec<Skill>) -> Self {
        Self {
            count: skills.len(),
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
    pub count: usize,
}
