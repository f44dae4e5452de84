//! Role repository port, including each role's skill requirements.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, RoleId};
use crate::domain::workforce::{Role, RoleSkillRequirement};

#[async_trait]
pub trait RoleRepository: Send {
    async fn insert(&mut self, role: &Role) -> Result<(), DomainError>;

    async fn find_by_id(&mut self, id: RoleId) -> Result<Option<Role>, DomainError>;

    /// First role with the given title, if any. Titles are not unique.
    async fn find_by_title(&mut self, title: &str) -> Result<Option<Role>, DomainError>;

    /// Roles ordered by title.
    async fn list(&mut self) -> Result<Vec<Role>, DomainError>;

    /// Requirements of a role in the order they were declared.
    async fn requirements(&mut self, role_id: RoleId)
        -> Result<Vec<RoleSkillRequirement>, DomainError>;

    /// Replace the full requirement set of a role.
    ///
    /// # Errors
    ///
    /// - `RoleNotFound` if the role does not exist
    /// - `SkillNotFound` if a requirement names an unknown skill
    async fn replace_requirements(
        &mut self,
        role_id: RoleId,
        requirements: &[RoleSkillRequirement],
    ) -> Result<(), DomainError>;
}
