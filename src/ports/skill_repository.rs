//! Skill catalogue repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SkillId};
use crate::domain::workforce::Skill;

#[async_trait]
pub trait SkillRepository: Send {
    /// Insert a new skill.
    ///
    /// # Errors
    ///
    /// - `SkillExists` if the name is taken
    async fn insert(&mut self, skill: &Skill) -> Result<(), DomainError>;

    /// # Errors
    ///
    /// - `SkillNotFound` if the skill does not exist
    /// - `SkillExists` if the new name collides
    async fn update(&mut self, skill: &Skill) -> Result<(), DomainError>;

    async fn find_by_id(&mut self, id: SkillId) -> Result<Option<Skill>, DomainError>;

    async fn find_by_name(&mut self, name: &str) -> Result<Option<Skill>, DomainError>;

    /// Skills ordered by name, optionally restricted to one category.
    async fn list(&mut self, category: Option<&str>) -> Result<Vec<Skill>, DomainError>;

    /// Distinct non-empty categories, sorted.
    async fn categories(&mut self) -> Result<Vec<String>, DomainError>;

    /// Delete a skill and every row referencing it. Returns false if absent.
    async fn delete(&mut self, id: SkillId) -> Result<bool, DomainError>;
}
