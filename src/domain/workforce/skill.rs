//! Skill catalogue entry.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SkillId, Timestamp, ValidationError};

use super::require_non_empty;

/// A named, categorised capability employees can hold and roles can require.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    /// Unique across the catalogue.
    pub name: String,
    pub description: Option<String>,
    /// Free-form grouping such as "Technical" or "Soft Skills".
    pub category: Option<String>,
    pub created_at: Timestamp,
}

/// Partial update of a skill.
#[derive(Debug, Clone, Default)]
pub struct SkillUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl Skill {
    /// Creates a new skill with a validated name.
    pub fn create(
        name: impl Into<String>,
        description: Option<String>,
        category: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: SkillId::new(),
            name: require_non_empty("name", name.into())?,
            description,
            category,
            created_at: Timestamp::now(),
        })
    }

    /// Applies a partial update.
    pub fn apply_update(&mut self, update: SkillUpdate) -> Result<(), ValidationError> {
        if let Some(name) = update.name {
            self.name = require_non_empty("name", name)?;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(category) = update.category {
            self.category = Some(category);
        }
        Ok(())
    }
}
