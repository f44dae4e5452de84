//! AnalyzeSkillGapsHandler - Command handler that recomputes and stores gaps.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{DomainError, EmployeeId, SkillId, Timestamp};
use crate::domain::gap_analysis::{
    GapAnalyzer, GapDetails, ProficiencyIndex, RequirementIndex, SkillGapRecord,
};
use crate::domain::workforce::{Employee, EmployeeFilter, Skill};
use crate::ports::{UnitOfWork, WorkforceStore};

use super::super::{employee_not_found, role_not_found, skill_not_found};

/// Command to analyze one employee, or everyone when `employee_id` is `None`.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeSkillGapsCommand {
    pub employee_id: Option<EmployeeId>,
}

/// Result of an analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzeSkillGapsResult {
    pub employees_analyzed: usize,
    pub employees_skipped: usize,
    /// Stored records with `gap_score < 0`.
    pub gaps_found: usize,
    /// Every record written by this run, in analysis order.
    pub records: Vec<GapDetails>,
}

/// Handler for running gap analysis.
///
/// The whole batch runs in one unit of work: if any lookup fails nothing is
/// written. Afterwards each analyzed employee has exactly one record per
/// skill their current role requires, and none when they have no role.
pub struct AnalyzeSkillGapsHandler {
    store: Arc<dyn WorkforceStore>,
}

impl AnalyzeSkillGapsHandler {
    pub fn new(store: Arc<dyn WorkforceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: AnalyzeSkillGapsCommand,
    ) -> Result<AnalyzeSkillGapsResult, DomainError> {
        let mut uow = self.store.begin().await?;

        // 1. Select employees
        let employees = match cmd.employee_id {
            Some(id) => vec![uow
                .employees()
                .find_by_id(id)
                .await?
                .ok_or_else(|| employee_not_found(id))?],
            None => uow.employees().list(&EmployeeFilter::default()).await?,
        };

        // 2. Load what the analyzer needs
        let requirements = load_requirements(uow.as_mut(), &employees).await?;
        let proficiencies = load_proficiencies(uow.as_mut(), &employees).await?;
        let skills = load_skills(uow.as_mut(), &requirements).await?;

        // 3. Compute
        let analysis = GapAnalyzer::analyze(&employees, &requirements, &proficiencies)?;
        debug!(
            employees = analysis.employees_analyzed,
            skipped = analysis.employees_skipped,
            gaps = analysis.gaps.len(),
            "Gap analysis computed"
        );

        // 4. Persist, one row per (employee, skill)
        let names: HashMap<EmployeeId, String> =
            employees.iter().map(|e| (e.id, e.full_name())).collect();
        let analysis_date = Timestamp::now();
        let mut records = Vec::with_capacity(analysis.gaps.len());

        for gap in &analysis.gaps {
            let stored = uow
                .gap_records()
                .upsert(&SkillGapRecord::from_gap(*gap, analysis_date))
                .await?;
            let skill = skills
                .get(&gap.skill_id)
                .ok_or_else(|| skill_not_found(gap.skill_id))?;
            records.push(GapDetails {
                record: stored,
                employee_name: names.get(&gap.employee_id).cloned().unwrap_or_default(),
                skill_name: skill.name.clone(),
                skill_category: skill.category.clone(),
            });
        }

        // 5. Drop rows for skills the employee's current role no longer requires
        let mut pruned = 0;
        for employee in &employees {
            let keep: Vec<SkillId> = analysis
                .gaps
                .iter()
                .filter(|gap| gap.employee_id == employee.id)
                .map(|gap| gap.skill_id)
                .collect();
            pruned += uow
                .gap_records()
                .delete_for_employee_except(employee.id, &keep)
                .await?;
        }
        if pruned > 0 {
            debug!(pruned, "Removed stale gap records");
        }

        uow.commit().await?;

        let gaps_found = analysis.gaps_found();
        info!(
            employees_analyzed = analysis.employees_analyzed,
            gaps_found,
            records = records.len(),
            "Skill gap analysis completed"
        );

        Ok(AnalyzeSkillGapsResult {
            employees_analyzed: analysis.employees_analyzed,
            employees_skipped: analysis.employees_skipped,
            gaps_found,
            records,
        })
    }
}

async fn load_requirements(
    uow: &mut dyn UnitOfWork,
    employees: &[Employee],
) -> Result<RequirementIndex, DomainError> {
    let mut index = RequirementIndex::new();
    for role_id in employees.iter().filter_map(|e| e.role_id) {
        if index.contains_key(&role_id) {
            continue;
        }
        uow.roles()
            .find_by_id(role_id)
            .await?
            .ok_or_else(|| role_not_found(role_id))?;
        let requirements = uow.roles().requirements(role_id).await?;
        index.insert(role_id, requirements);
    }
    Ok(index)
}

async fn load_proficiencies(
    uow: &mut dyn UnitOfWork,
    employees: &[Employee],
) -> Result<ProficiencyIndex, DomainError> {
    let mut index = ProficiencyIndex::new();
    for employee in employees.iter().filter(|e| e.has_role()) {
        for assessed in uow.employees().list_skills(employee.id).await? {
            index.insert(
                (assessed.employee_id, assessed.skill_id),
                assessed.proficiency_level,
            );
        }
    }
    Ok(index)
}

async fn load_skills(
    uow: &mut dyn UnitOfWork,
    requirements: &RequirementIndex,
) -> Result<HashMap<SkillId, Skill>, DomainError> {
    let mut skills = HashMap::new();
    for requirement in requirements.values().flatten() {
        if skills.contains_key(&requirement.skill_id) {
            continue;
        }
        let skill = uow
            .skills()
            .find_by_id(requirement.skill_id)
            .await?
            .ok_or_else(|| skill_not_found(requirement.skill_id))?;
        skills.insert(skill.id, skill);
    }
    Ok(skills)
}
