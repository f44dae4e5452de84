//! Bulk loader for the JSON sample data set.
//!
//! Reads `skills.json`, `roles.json` and `employees.json` from a directory and
//! inserts them in dependency order. Entries whose unique key (skill name,
//! role title, employee code) already exists are skipped, so loading the same
//! directory twice is harmless. Cross references are by name: role
//! requirements and employee skills name their skill, employees name their
//! role by title. Unknown references are logged and ignored.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::foundation::{DomainError, ProficiencyLevel};
use crate::domain::workforce::{
    Employee, EmployeeSkill, NewEmployee, Role, RoleSkillRequirement, Skill,
};
use crate::ports::{UnitOfWork, WorkforceStore};

pub const SKILLS_FILE: &str = "skills.json";
pub const ROLES_FILE: &str = "roles.json";
pub const EMPLOYEES_FILE: &str = "employees.json";

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Store(#[from] DomainError),
}

// ════════════════════════════════════════════════════════════════════════════════
// File formats
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequiredSkillEntry {
    pub skill_name: String,
    #[serde(default = "default_required_level")]
    pub required_level: ProficiencyLevel,
}

fn default_required_level() -> ProficiencyLevel {
    ProficiencyLevel::DEFAULT_REQUIRED
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoleEntry {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<RequiredSkillEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeSkillEntry {
    pub skill_name: String,
    pub proficiency_level: ProficiencyLevel,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeEntry {
    #[serde(alias = "employee_id")]
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub department: Option<String>,
    /// Role title.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    #[serde(default)]
    pub skills: Vec<EmployeeSkillEntry>,
}

/// Counts of newly created entities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub skills_created: usize,
    pub roles_created: usize,
    pub employees_created: usize,
}

impl LoadSummary {
    pub fn is_empty(&self) -> bool {
        self.skills_created == 0 && self.roles_created == 0 && self.employees_created == 0
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoaderError> {
    let raw = std::fs::read_to_string(path).map_err(|source| LoaderError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| LoaderError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Loading
// ════════════════════════════════════════════════════════════════════════════════

/// Loads every sample file in `dir` into `store`.
///
/// All three files are parsed before anything is written. Each file is then
/// loaded in its own unit of work.
pub async fn load_sample_data(
    store: &dyn WorkforceStore,
    dir: &Path,
) -> Result<LoadSummary, LoaderError> {
    let skills: Vec<SkillEntry> = read_json(&dir.join(SKILLS_FILE))?;
    let roles: Vec<RoleEntry> = read_json(&dir.join(ROLES_FILE))?;
    let employees: Vec<EmployeeEntry> = read_json(&dir.join(EMPLOYEES_FILE))?;

    let summary = LoadSummary {
        skills_created: load_skills(store, skills).await?,
        roles_created: load_roles(store, roles).await?,
        employees_created: load_employees(store, employees).await?,
    };

    info!(
        skills = summary.skills_created,
        roles = summary.roles_created,
        employees = summary.employees_created,
        "Sample data loaded"
    );
    Ok(summary)
}

async fn load_skills(
    store: &dyn WorkforceStore,
    entries: Vec<SkillEntry>,
) -> Result<usize, LoaderError> {
    let mut uow = store.begin().await?;
    let mut created = 0;

    for entry in entries {
        if uow.skills().find_by_name(entry.name.trim()).await?.is_some() {
            debug!(name = %entry.name, "Skill already exists, skipping");
            continue;
        }
        let skill = Skill::create(entry.name, entry.description, entry.category)
            .map_err(DomainError::from)?;
        uow.skills().insert(&skill).await?;
        created += 1;
    }

    uow.commit().await?;
    Ok(created)
}

async fn load_roles(
    store: &dyn WorkforceStore,
    entries: Vec<RoleEntry>,
) -> Result<usize, LoaderError> {
    let mut uow = store.begin().await?;
    let mut created = 0;

    for entry in entries {
        if uow.roles().find_by_title(entry.title.trim()).await?.is_some() {
            debug!(title = %entry.title, "Role already exists, skipping");
            continue;
        }
        let role = Role::create(entry.title, entry.description, entry.department, entry.level)
            .map_err(DomainError::from)?;

        let mut requirements: Vec<RoleSkillRequirement> = Vec::new();
        for required in &entry.required_skills {
            let Some(skill) = uow.skills().find_by_name(&required.skill_name).await? else {
                warn!(role = %role.title, skill = %required.skill_name, "Unknown skill in role requirements");
                continue;
            };
            if requirements.iter().any(|r| r.skill_id == skill.id) {
                continue;
            }
            requirements.push(RoleSkillRequirement::new(
                role.id,
                skill.id,
                required.required_level,
            ));
        }

        uow.roles().insert(&role).await?;
        uow.roles().replace_requirements(role.id, &requirements).await?;
        created += 1;
    }

    uow.commit().await?;
    Ok(created)
}

async fn load_employees(
    store: &dyn WorkforceStore,
    entries: Vec<EmployeeEntry>,
) -> Result<usize, LoaderError> {
    let mut uow = store.begin().await?;
    let mut created = 0;

    for entry in entries {
        if uow
            .employees()
            .find_by_code(entry.employee_code.trim())
            .await?
            .is_some()
        {
            debug!(code = %entry.employee_code, "Employee already exists, skipping");
            continue;
        }

        let role_id = match entry.role.as_deref() {
            Some(title) => {
                let role = uow.roles().find_by_title(title).await?;
                if role.is_none() {
                    warn!(code = %entry.employee_code, role = %title, "Unknown role, employee left unassigned");
                }
                role.map(|r| r.id)
            }
            None => None,
        };

        let employee = Employee::create(NewEmployee {
            employee_code: entry.employee_code,
            first_name: entry.first_name,
            last_name: entry.last_name,
            email: entry.email,
            department: entry.department,
            role_id,
            hire_date: entry.hire_date,
        })
        .map_err(DomainError::from)?;
        uow.employees().insert(&employee).await?;

        assign_skills(uow.as_mut(), &employee, &entry.skills).await?;
        created += 1;
    }

    uow.commit().await?;
    Ok(created)
}

async fn assign_skills(
    uow: &mut dyn UnitOfWork,
    employee: &Employee,
    entries: &[EmployeeSkillEntry],
) -> Result<(), LoaderError> {
    let mut assigned = Vec::new();
    for entry in entries {
        let Some(skill) = uow.skills().find_by_name(&entry.skill_name).await? else {
            warn!(code = %employee.employee_code, skill = %entry.skill_name, "Unknown skill for employee");
            continue;
        };
        if assigned.contains(&skill.id) {
            continue;
        }
        uow.employees()
            .assign_skill(&EmployeeSkill::assessed_now(
                employee.id,
                skill.id,
                entry.proficiency_level,
            ))
            .await?;
        assigned.push(skill.id);
    }
    Ok(())
}
