//! Shared application state for all HTTP modules.

use std::sync::Arc;

use crate::application::handlers::employees::{
    AssignSkillHandler, CreateEmployeeHandler, DeleteEmployeeHandler, GetEmployeeHandler,
    ListEmployeeSkillsHandler, ListEmployeesHandler, ListTrainingHandler, RecordTrainingHandler,
    UpdateEmployeeHandler,
};
use crate::application::handlers::gap_analysis::{
    AnalyzeSkillGapsHandler, GenerateRecommendationsHandler, GetEmployeeGapsHandler,
    GetSkillPredictionsHandler,
};
use crate::application::handlers::roles::{
    CreateRoleHandler, GetRoleHandler, ListRolesHandler, SetRoleRequirementsHandler,
};
use crate::application::handlers::skills::{
    CreateSkillHandler, DeleteSkillHandler, GetSkillHandler, ListSkillsHandler,
    UpdateSkillHandler,
};
use crate::ports::WorkforceStore;

/// Shared application state.
///
/// Cloned for each request; handlers are created on demand from the store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WorkforceStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self { store }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Gap Analysis
    // ════════════════════════════════════════════════════════════════════════════

    pub fn analyze_skill_gaps_handler(&self) -> AnalyzeSkillGapsHandler {
        AnalyzeSkillGapsHandler::new(self.store.clone())
    }

    pub fn employee_gaps_handler(&self) -> GetEmployeeGapsHandler {
        GetEmployeeGapsHandler::new(self.store.clone())
    }

    pub fn skill_predictions_handler(&self) -> GetSkillPredictionsHandler {
        GetSkillPredictionsHandler::new(self.store.clone())
    }

    pub fn recommendations_handler(&self) -> GenerateRecommendationsHandler {
        GenerateRecommendationsHandler::new(self.store.clone())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Employees
    // ════════════════════════════════════════════════════════════════════════════

    pub fn create_employee_handler(&self) -> CreateEmployeeHandler {
        CreateEmployeeHandler::new(self.store.clone())
    }

    pub fn update_employee_handler(&self) -> UpdateEmployeeHandler {
        UpdateEmployeeHandler::new(self.store.clone())
    }

    pub fn delete_employee_handler(&self) -> DeleteEmployeeHandler {
        DeleteEmployeeHandler::new(self.store.clone())
    }

    pub fn get_employee_handler(&self) -> GetEmployeeHandler {
        GetEmployeeHandler::new(self.store.clone())
    }

    pub fn list_employees_handler(&self) -> ListEmployeesHandler {
        ListEmployeesHandler::new(self.store.clone())
    }

    pub fn assign_skill_handler(&self) -> AssignSkillHandler {
        AssignSkillHandler::new(self.store.clone())
    }

    pub fn list_employee_skills_handler(&self) -> ListEmployeeSkillsHandler {
        ListEmployeeSkillsHandler::new(self.store.clone())
    }

    pub fn record_training_handler(&self) -> RecordTrainingHandler {
        RecordTrainingHandler::new(self.store.clone())
    }

    pub fn list_training_handler(&self) -> ListTrainingHandler {
        ListTrainingHandler::new(self.store.clone())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Skills
    // ════════════════════════════════════════════════════════════════════════════

    pub fn create_skill_handler(&self) -> CreateSkillHandler {
        CreateSkillHandler::new(self.store.clone())
    }

    pub fn update_skill_handler(&self) -> UpdateSkillHandler {
        UpdateSkillHandler::new(self.store.clone())
    }

    pub fn delete_skill_handler(&self) -> DeleteSkillHandler {
        DeleteSkillHandler::new(self.store.clone())
    }

    pub fn get_skill_handler(&self) -> GetSkillHandler {
        GetSkillHandler::new(self.store.clone())
    }

    pub fn list_skills_handler(&self) -> ListSkillsHandler {
        ListSkillsHandler::new(self.store.clone())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Roles
    // ════════════════════════════════════════════════════════════════════════════

    pub fn create_role_handler(&self) -> CreateRoleHandler {
        CreateRoleHandler::new(self.store.clone())
    }

    pub fn set_role_requirements_handler(&self) -> SetRoleRequirementsHandler {
        SetRoleRequirementsHandler::new(self.store.clone())
    }

    pub fn get_role_handler(&self) -> GetRoleHandler {
        GetRoleHandler::new(self.store.clone())
    }

    pub fn list_roles_handler(&self) -> ListRolesHandler {
        ListRolesHandler::new(self.store.clone())
    }
}
