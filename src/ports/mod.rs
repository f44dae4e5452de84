//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `WorkforceStore` - Opens units of work
//! - `UnitOfWork` - Transaction handle exposing the repositories below
//! - `EmployeeRepository` - Employees and their proficiencies
//! - `SkillRepository` - Skill catalogue
//! - `RoleRepository` - Roles and their skill requirements
//! - `GapRecordRepository` - Stored gap analysis results
//! - `TrainingRecordRepository` - Training history

mod employee_repository;
mod gap_record_repository;
mod role_repository;
mod skill_repository;
mod training_record_repository;
mod workforce_store;

pub use employee_repository::EmployeeRepository;
pub use gap_record_repository::GapRecordRepository;
pub use role_repository::RoleRepository;
pub use skill_repository::SkillRepository;
pub use training_record_repository::TrainingRecordRepository;
pub use workforce_store::{UnitOfWork, WorkforceStore};
