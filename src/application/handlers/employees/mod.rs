//! Employee command and query handlers.

mod assign_skill;
mod create_employee;
mod delete_employee;
mod get_employee;
mod list_employees;
mod training;
mod update_employee;

pub use assign_skill::{AssignSkillCommand, AssignSkillHandler};
pub use create_employee::{CreateEmployeeCommand, CreateEmployeeHandler};
pub use delete_employee::{DeleteEmployeeCommand, DeleteEmployeeHandler};
pub use get_employee::{
    AssessedSkill, EmployeeView, GetEmployeeHandler, GetEmployeeQuery, ListEmployeeSkillsHandler,
    ListEmployeeSkillsQuery,
};
pub use list_employees::{ListEmployeesHandler, ListEmployeesQuery};
pub use training::{
    ListTrainingHandler, ListTrainingQuery, RecordTrainingCommand, RecordTrainingHandler,
};
pub use update_employee::{UpdateEmployeeCommand, UpdateEmployeeHandler};
