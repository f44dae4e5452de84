//! Proficiency level value object (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Skill mastery rating: 1 (novice) to 5 (expert).
///
/// Used both for an employee's assessed proficiency and for the minimum
/// level a role requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct ProficiencyLevel(u8);

impl ProficiencyLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Default level a role requires when none is given.
    pub const DEFAULT_REQUIRED: ProficiencyLevel = ProficiencyLevel(3);

    /// Default level assigned to a newly recorded skill.
    pub const DEFAULT_ASSESSED: ProficiencyLevel = ProficiencyLevel(1);

    /// Creates a level, returning error if outside 1..=5.
    pub fn try_new(value: i32) -> Result<Self, ValidationError> {
        if value < Self::MIN as i32 || value > Self::MAX as i32 {
            return Err(ValidationError::out_of_range(
                "proficiency_level",
                Self::MIN as i32,
                Self::MAX as i32,
                value,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> i32 {
        self.0 as i32
    }
}

impl TryFrom<i32> for ProficiencyLevel {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<ProficiencyLevel> for i32 {
    fn from(level: ProficiencyLevel) -> Self {
        level.value()
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
