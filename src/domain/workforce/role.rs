//! Job role and its skill requirements.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProficiencyLevel, RoleId, SkillId, Timestamp, ValidationError};

use super::require_non_empty;

/// A job role that employees are assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub title: String,
    pub description: Option<String>,
    pub department: Option<String>,
    /// Seniority label: Junior, Mid, Senior, Lead, ...
    pub level: Option<String>,
    pub created_at: Timestamp,
}

impl Role {
    /// Creates a new role with a validated title.
    pub fn create(
        title: impl Into<String>,
        description: Option<String>,
        department: Option<String>,
        level: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: RoleId::new(),
            title: require_non_empty("title", title.into())?,
            description,
            department,
            level,
            created_at: Timestamp::now(),
        })
    }
}

/// Minimum proficiency a role demands for one skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSkillRequirement {
    pub role_id: RoleId,
    pub skill_id: SkillId,
    pub required_level: ProficiencyLevel,
}

impl RoleSkillRequirement {
    pub fn new(role_id: RoleId, skill_id: SkillId, required_level: ProficiencyLevel) -> Self {
        Self {
            role_id,
            skill_id,
            required_level,
        }
    }
}
