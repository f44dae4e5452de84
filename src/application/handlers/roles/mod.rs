//! Role handlers.

mod commands;
mod queries;

pub use commands::{
    CreateRoleCommand, CreateRoleHandler, RequirementInput, SetRoleRequirementsCommand,
    SetRoleRequirementsHandler,
};
pub use queries::{GetRoleHandler, GetRoleQuery, ListRolesHandler, RequiredSkill, RoleView};
