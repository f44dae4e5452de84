//! Skill catalogue handlers.

mod commands;
mod queries;

pub use commands::{
    CreateSkillCommand, CreateSkillHandler, DeleteSkillCommand, DeleteSkillHandler,
    UpdateSkillCommand, UpdateSkillHandler,
};
pub use queries::{GetSkillHandler, GetSkillQuery, ListSkillsHandler, ListSkillsQuery};
