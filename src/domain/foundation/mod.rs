//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the skills gap domain.

mod errors;
mod ids;
mod proficiency;
mod timestamp;

pub use errors::{DomainError, ErrorCategory, ErrorCode, ValidationError};
pub use ids::{EmployeeId, GapRecordId, RoleId, SkillId, TrainingRecordId};
pub use proficiency::ProficiencyLevel;
pub use timestamp::Timestamp;
