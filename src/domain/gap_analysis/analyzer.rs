//! Batch gap analysis over employees and their roles' requirements.

use std::collections::HashMap;

use crate::domain::foundation::{
    DomainError, EmployeeId, ErrorCode, ProficiencyLevel, RoleId, SkillId,
};
use crate::domain::workforce::{Employee, RoleSkillRequirement};

use super::record::SkillGap;

/// Result of one analysis pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GapAnalysis {
    /// One entry per (employee, required skill), in input order.
    pub gaps: Vec<SkillGap>,
    /// Number of employees handed to the analysis, including skipped ones.
    pub employees_analyzed: usize,
    /// Employees without a role; they produce no gaps.
    pub employees_skipped: usize,
}

impl GapAnalysis {
    /// Number of gaps where the employee is below the required level.
    pub fn gaps_found(&self) -> usize {
        self.gaps.iter().filter(|g| g.is_deficit()).count()
    }
}

/// Assessed proficiencies keyed by (employee, skill).
pub type ProficiencyIndex = HashMap<(EmployeeId, SkillId), ProficiencyLevel>;

/// Requirement lists keyed by role, each in the role's declared order.
pub type RequirementIndex = HashMap<RoleId, Vec<RoleSkillRequirement>>;

/// Stateless analyzer comparing employees against their role requirements.
pub struct GapAnalyzer;

impl GapAnalyzer {
    /// Computes a gap for every requirement of every employee's role.
    ///
    /// # Errors
    ///
    /// Returns `RoleNotFound` when an employee references a role with no
    /// entry in `requirements`. A role with no requirements must be present
    /// with an empty list.
    pub fn analyze(
        employees: &[Employee],
        requirements: &RequirementIndex,
        proficiencies: &ProficiencyIndex,
    ) -> Result<GapAnalysis, DomainError> {
        let mut analysis = GapAnalysis {
            employees_analyzed: employees.len(),
            ..Default::default()
        };

        for employee in employees {
            let Some(role_id) = employee.role_id else {
                analysis.employees_skipped += 1;
                continue;
            };

            let role_requirements = requirements.get(&role_id).ok_or_else(|| {
                DomainError::new(
                    ErrorCode::RoleNotFound,
                    format!("Role {} assigned to employee {} not found", role_id, employee.id),
                )
                .with_detail("role_id", role_id.to_string())
                .with_detail("employee_id", employee.id.to_string())
            })?;

            analysis.gaps.extend(
                role_requirements
                    .iter()
                    .map(|req| Self::evaluate(employee.id, req, proficiencies)),
            );
        }

        Ok(analysis)
    }

    fn evaluate(
        employee_id: EmployeeId,
        requirement: &RoleSkillRequirement,
        proficiencies: &ProficiencyIndex,
    ) -> SkillGap {
        let current_level = proficiencies
            .get(&(employee_id, requirement.skill_id))
            .map_or(0, |level| level.value());

        SkillGap::evaluate(
            employee_id,
            requirement.skill_id,
            current_level,
            requirement.required_level.value(),
        )
    }
}
