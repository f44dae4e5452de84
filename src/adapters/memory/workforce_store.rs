//! In-memory implementation of the workforce store.
//!
//! A unit of work holds the store's lock for its whole lifetime and edits a
//! private copy of the data. `commit` swaps the copy in; dropping the unit
//! leaves the shared data untouched. Units therefore run one at a time.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::foundation::{
    DomainError, EmployeeId, ErrorCode, ProficiencyLevel, RoleId, SkillId,
};
use crate::domain::gap_analysis::{GapDetails, GapRecordFilter, SkillGapRecord};
use crate::domain::workforce::{
    Employee, EmployeeFilter, EmployeeSkill, Role, RoleSkillRequirement, Skill, TrainingRecord,
};
use crate::ports::{
    EmployeeRepository, GapRecordRepository, RoleRepository, SkillRepository,
    TrainingRecordRepository, UnitOfWork, WorkforceStore,
};

#[derive(Debug, Clone, Default)]
struct State {
    employees: HashMap<EmployeeId, Employee>,
    employee_skills: HashMap<(EmployeeId, SkillId), EmployeeSkill>,
    skills: HashMap<SkillId, Skill>,
    roles: HashMap<RoleId, Role>,
    requirements: HashMap<RoleId, Vec<RoleSkillRequirement>>,
    gap_records: HashMap<(EmployeeId, SkillId), SkillGapRecord>,
    training: Vec<TrainingRecord>,
}

impl State {
    fn require_employee(&self, id: EmployeeId) -> Result<(), DomainError> {
        if self.employees.contains_key(&id) {
            Ok(())
        } else {
            Err(employee_not_found(id))
        }
    }

    fn require_skill(&self, id: SkillId) -> Result<(), DomainError> {
        if self.skills.contains_key(&id) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::SkillNotFound,
                format!("Skill not found: {}", id),
            ))
        }
    }

    fn require_role(&self, id: Option<RoleId>) -> Result<(), DomainError> {
        match id {
            Some(id) if !self.roles.contains_key(&id) => Err(role_not_found(id)),
            _ => Ok(()),
        }
    }

    fn check_employee_unique(&self, employee: &Employee) -> Result<(), DomainError> {
        let clash = self.employees.values().any(|e| {
            e.id != employee.id
                && (e.employee_code == employee.employee_code || e.email == employee.email)
        });
        if clash {
            return Err(DomainError::new(
                ErrorCode::EmployeeExists,
                "Employee ID or email already exists",
            ));
        }
        Ok(())
    }

    fn check_skill_name_unique(&self, skill: &Skill) -> Result<(), DomainError> {
        if self
            .skills
            .values()
            .any(|s| s.id != skill.id && s.name == skill.name)
        {
            return Err(DomainError::new(
                ErrorCode::SkillExists,
                "Skill name already exists",
            ));
        }
        Ok(())
    }

    fn details(&self, record: &SkillGapRecord) -> Option<GapDetails> {
        let employee = self.employees.get(&record.gap.employee_id)?;
        let skill = self.skills.get(&record.gap.skill_id)?;
        Some(GapDetails {
            record: *record,
            employee_name: employee.full_name(),
            skill_name: skill.name.clone(),
            skill_category: skill.category.clone(),
        })
    }
}

fn employee_not_found(id: EmployeeId) -> DomainError {
    DomainError::new(
        ErrorCode::EmployeeNotFound,
        format!("Employee not found: {}", id),
    )
}

fn role_not_found(id: RoleId) -> DomainError {
    DomainError::new(ErrorCode::RoleNotFound, format!("Role not found: {}", id))
}

/// Workforce store kept entirely in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkforceStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryWorkforceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored gap records (useful for tests)
    pub async fn gap_record_count(&self) -> usize {
        self.state.lock().await.gap_records.len()
    }
}

#[async_trait]
impl WorkforceStore for InMemoryWorkforceStore {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, DomainError> {
        let guard = Arc::clone(&self.state).lock_owned().await;
        let working = (*guard).clone();
        Ok(Box::new(InMemoryUnitOfWork { guard, working }))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

struct InMemoryUnitOfWork {
    guard: OwnedMutexGuard<State>,
    working: State,
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    fn employees(&mut self) -> &mut dyn EmployeeRepository {
        self
    }

    fn skills(&mut self) -> &mut dyn SkillRepository {
        self
    }

    fn roles(&mut self) -> &mut dyn RoleRepository {
        self
    }

    fn gap_records(&mut self) -> &mut dyn GapRecordRepository {
        self
    }

    fn training_records(&mut self) -> &mut dyn TrainingRecordRepository {
        self
    }

    async fn commit(self: Box<Self>) -> Result<(), DomainError> {
        let InMemoryUnitOfWork { mut guard, working } = *self;
        *guard = working;
        Ok(())
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryUnitOfWork {
    async fn insert(&mut self, employee: &Employee) -> Result<(), DomainError> {
        self.working.check_employee_unique(employee)?;
        self.working.require_role(employee.role_id)?;
        self.working.employees.insert(employee.id, employee.clone());
        Ok(())
    }

    async fn update(&mut self, employee: &Employee) -> Result<(), DomainError> {
        self.working.require_employee(employee.id)?;
        self.working.check_employee_unique(employee)?;
        self.working.require_role(employee.role_id)?;
        self.working.employees.insert(employee.id, employee.clone());
        Ok(())
    }

    async fn find_by_id(&mut self, id: EmployeeId) -> Result<Option<Employee>, DomainError> {
        Ok(self.working.employees.get(&id).cloned())
    }

    async fn find_by_code(&mut self, code: &str) -> Result<Option<Employee>, DomainError> {
        Ok(self
            .working
            .employees
            .values()
            .find(|e| e.employee_code == code)
            .cloned())
    }

    async fn list(&mut self, filter: &EmployeeFilter) -> Result<Vec<Employee>, DomainError> {
        let mut employees: Vec<Employee> = self
            .working
            .employees
            .values()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        employees.sort_by(|a, b| a.employee_code.cmp(&b.employee_code));
        Ok(employees)
    }

    async fn delete(&mut self, id: EmployeeId) -> Result<bool, DomainError> {
        let state = &mut self.working;
        if state.employees.remove(&id).is_none() {
            return Ok(false);
        }
        state.employee_skills.retain(|(e, _), _| *e != id);
        state.gap_records.retain(|(e, _), _| *e != id);
        state.training.retain(|t| t.employee_id != id);
        Ok(true)
    }

    async fn assign_skill(&mut self, skill: &EmployeeSkill) -> Result<(), DomainError> {
        let state = &mut self.working;
        state.require_employee(skill.employee_id)?;
        state.require_skill(skill.skill_id)?;

        let key = (skill.employee_id, skill.skill_id);
        if state.employee_skills.contains_key(&key) {
            return Err(DomainError::new(
                ErrorCode::SkillAlreadyAssigned,
                "Skill already assigned to employee",
            ));
        }
        state.employee_skills.insert(key, skill.clone());
        Ok(())
    }

    async fn list_skills(
        &mut self,
        employee_id: EmployeeId,
    ) -> Result<Vec<EmployeeSkill>, DomainError> {
        let state = &self.working;
        let mut skills: Vec<EmployeeSkill> = state
            .employee_skills
            .values()
            .filter(|s| s.employee_id == employee_id)
            .cloned()
            .collect();
        skills.sort_by_key(|s| state.skills.get(&s.skill_id).map(|k| k.name.clone()));
        Ok(skills)
    }

    async fn proficiency(
        &mut self,
        employee_id: EmployeeId,
        skill_id: SkillId,
    ) -> Result<Option<ProficiencyLevel>, DomainError> {
        Ok(self
            .working
            .employee_skills
            .get(&(employee_id, skill_id))
            .map(|s| s.proficiency_level))
    }
}

#[async_trait]
impl SkillRepository for InMemoryUnitOfWork {
    async fn insert(&mut self, skill: &Skill) -> Result<(), DomainError> {
        self.working.check_skill_name_unique(skill)?;
        self.working.skills.insert(skill.id, skill.clone());
        Ok(())
    }

    async fn update(&mut self, skill: &Skill) -> Result<(), DomainError> {
        self.working.require_skill(skill.id)?;
        self.working.check_skill_name_unique(skill)?;
        self.working.skills.insert(skill.id, skill.clone());
        Ok(())
    }

    async fn find_by_id(&mut self, id: SkillId) -> Result<Option<Skill>, DomainError> {
        Ok(self.working.skills.get(&id).cloned())
    }

    async fn find_by_name(&mut self, name: &str) -> Result<Option<Skill>, DomainError> {
        Ok(self
            .working
            .skills
            .values()
            .find(|s| s.name == name)
            .cloned())
    }

    async fn list(&mut self, category: Option<&str>) -> Result<Vec<Skill>, DomainError> {
        let mut skills: Vec<Skill> = self
            .working
            .skills
            .values()
            .filter(|s| category.map_or(true, |c| s.category.as_deref() == Some(c)))
            .cloned()
            .collect();
        skills.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(skills)
    }

    async fn categories(&mut self) -> Result<Vec<String>, DomainError> {
        let categories: BTreeSet<String> = self
            .working
            .skills
            .values()
            .filter_map(|s| s.category.clone())
            .collect();
        Ok(categories.into_iter().collect())
    }

    async fn delete(&mut self, id: SkillId) -> Result<bool, DomainError> {
        let state = &mut self.working;
        if state.skills.remove(&id).is_none() {
            return Ok(false);
        }
        state.employee_skills.retain(|(_, s), _| *s != id);
        state.gap_records.retain(|(_, s), _| *s != id);
        state.training.retain(|t| t.skill_id != id);
        for requirements in state.requirements.values_mut() {
            requirements.retain(|r| r.skill_id != id);
        }
        Ok(true)
    }
}

#[async_trait]
impl RoleRepository for InMemoryUnitOfWork {
    async fn insert(&mut self, role: &Role) -> Result<(), DomainError> {
        self.working.roles.insert(role.id, role.clone());
        Ok(())
    }

    async fn find_by_id(&mut self, id: RoleId) -> Result<Option<Role>, DomainError> {
        Ok(self.working.roles.get(&id).cloned())
    }

    async fn find_by_title(&mut self, title: &str) -> Result<Option<Role>, DomainError> {
        let mut matches: Vec<&Role> = self
            .working
            .roles
            .values()
            .filter(|r| r.title == title)
            .collect();
        matches.sort_by_key(|r| r.created_at);
        Ok(matches.first().map(|r| (*r).clone()))
    }

    async fn list(&mut self) -> Result<Vec<Role>, DomainError> {
        let mut roles: Vec<Role> = self.working.roles.values().cloned().collect();
        roles.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(roles)
    }

    async fn requirements(
        &mut self,
        role_id: RoleId,
    ) -> Result<Vec<RoleSkillRequirement>, DomainError> {
        Ok(self
            .working
            .requirements
            .get(&role_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn replace_requirements(
        &mut self,
        role_id: RoleId,
        requirements: &[RoleSkillRequirement],
    ) -> Result<(), DomainError> {
        let state = &mut self.working;
        if !state.roles.contains_key(&role_id) {
            return Err(role_not_found(role_id));
        }
        for requirement in requirements {
            state.require_skill(requirement.skill_id)?;
        }
        state.requirements.insert(role_id, requirements.to_vec());
        Ok(())
    }
}

#[async_trait]
impl GapRecordRepository for InMemoryUnitOfWork {
    async fn upsert(&mut self, record: &SkillGapRecord) -> Result<SkillGapRecord, DomainError> {
        let state = &mut self.working;
        state.require_employee(record.gap.employee_id)?;
        state.require_skill(record.gap.skill_id)?;

        let stored = match state.gap_records.get(&record.key()) {
            Some(existing) => SkillGapRecord {
                id: existing.id,
                ..*record
            },
            None => *record,
        };
        state.gap_records.insert(stored.key(), stored);
        Ok(stored)
    }

    async fn list(&mut self, filter: &GapRecordFilter) -> Result<Vec<GapDetails>, DomainError> {
        let state = &self.working;
        let mut details: Vec<GapDetails> = state
            .gap_records
            .values()
            .filter(|r| filter.matches(r))
            .filter_map(|r| state.details(r))
            .collect();
        details.sort_by(|a, b| {
            let code = |d: &GapDetails| {
                state
                    .employees
                    .get(&d.record.gap.employee_id)
                    .map(|e| e.employee_code.clone())
            };
            code(a)
                .cmp(&code(b))
                .then_with(|| a.skill_name.cmp(&b.skill_name))
        });
        Ok(details)
    }

    async fn delete_for_employee_except(
        &mut self,
        employee_id: EmployeeId,
        keep: &[SkillId],
    ) -> Result<u64, DomainError> {
        let before = self.working.gap_records.len();
        self.working
            .gap_records
            .retain(|(employee, skill), _| *employee != employee_id || keep.contains(skill));
        Ok((before - self.working.gap_records.len()) as u64)
    }
}

#[async_trait]
impl TrainingRecordRepository for InMemoryUnitOfWork {
    async fn insert(&mut self, record: &TrainingRecord) -> Result<(), DomainError> {
        self.working.require_employee(record.employee_id)?;
        self.working.require_skill(record.skill_id)?;
        self.working.training.push(record.clone());
        Ok(())
    }

    async fn list_for_employee(
        &mut self,
        employee_id: EmployeeId,
    ) -> Result<Vec<TrainingRecord>, DomainError> {
        let mut records: Vec<TrainingRecord> = self
            .working
            .training
            .iter()
            .filter(|t| t.employee_id == employee_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::gap_analysis::SkillGap;
    use crate::domain::workforce::NewEmployee;

    fn employee(code: &str, email: &str) -> Employee {
        Employee::create(NewEmployee {
            employee_code: code.to_string(),
            first_name: "Katherine".to_string(),
            last_name: "Johnson".to_string(),
            email: email.to_string(),
            department: Some("Research".to_string()),
            role_id: None,
            hire_date: None,
        })
        .unwrap()
    }

    async fn seed(store: &InMemoryWorkforceStore) -> (Employee, Skill) {
        let emp = employee("EMP001", "kj@example.com");
        let skill = Skill::create("Orbital Mechanics", None, Some("Technical".into())).unwrap();
        let mut uow = store.begin().await.unwrap();
        uow.employees().insert(&emp).await.unwrap();
        uow.skills().insert(&skill).await.unwrap();
        uow.commit().await.unwrap();
        (emp, skill)
    }

    #[tokio::test]
    async fn uncommitted_work_is_discarded() {
        let store = InMemoryWorkforceStore::new();
        {
            let mut uow = store.begin().await.unwrap();
            uow.employees()
                .insert(&employee("EMP001", "a@example.com"))
                .await
                .unwrap();
        }

        let mut uow = store.begin().await.unwrap();
        let all = uow.employees().list(&EmployeeFilter::default()).await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn duplicate_employee_code_conflicts() {
        let store = InMemoryWorkforceStore::new();
        seed(&store).await;

        let mut uow = store.begin().await.unwrap();
        let err = uow
            .employees()
            .insert(&employee("EMP001", "other@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmployeeExists);
    }

    #[tokio::test]
    async fn upsert_keeps_one_row_and_its_id() {
        let store = InMemoryWorkforceStore::new();
        let (emp, skill) = seed(&store).await;

        let mut uow = store.begin().await.unwrap();
        let first = uow
            .gap_records()
            .upsert(&SkillGapRecord::from_gap(
                SkillGap::evaluate(emp.id, skill.id, 1, 4),
                Timestamp::now(),
            ))
            .await
            .unwrap();
        let second = uow
            .gap_records()
            .upsert(&SkillGapRecord::from_gap(
                SkillGap::evaluate(emp.id, skill.id, 3, 4),
                Timestamp::now(),
            ))
            .await
            .unwrap();
        uow.commit().await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(store.gap_record_count().await, 1);

        let mut uow = store.begin().await.unwrap();
        let listed = uow
            .gap_records()
            .list(&GapRecordFilter::for_employee(emp.id))
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].record.gap.gap_score, -1);
        assert_eq!(listed[0].skill_name, "Orbital Mechanics");
    }

    #[tokio::test]
    async fn assigning_a_skill_twice_conflicts() {
        let store = InMemoryWorkforceStore::new();
        let (emp, skill) = seed(&store).await;
        let level = ProficiencyLevel::try_new(3).unwrap();

        let mut uow = store.begin().await.unwrap();
        uow.employees()
            .assign_skill(&EmployeeSkill::assessed_now(emp.id, skill.id, level))
            .await
            .unwrap();
        let err = uow
            .employees()
            .assign_skill(&EmployeeSkill::assessed_now(emp.id, skill.id, level))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SkillAlreadyAssigned);
        assert_eq!(
            uow.employees().proficiency(emp.id, skill.id).await.unwrap(),
            Some(level)
        );
    }

    #[tokio::test]
    async fn deleting_a_skill_cascades() {
        let store = InMemoryWorkforceStore::new();
        let (emp, skill) = seed(&store).await;
        let role = Role::create("Analyst", None, None, None).unwrap();

        let mut uow = store.begin().await.unwrap();
        uow.roles().insert(&role).await.unwrap();
        uow.roles()
            .replace_requirements(
                role.id,
                &[RoleSkillRequirement::new(
                    role.id,
                    skill.id,
                    ProficiencyLevel::DEFAULT_REQUIRED,
                )],
            )
            .await
            .unwrap();
        uow.employees()
            .assign_skill(&EmployeeSkill::assessed_now(
                emp.id,
                skill.id,
                ProficiencyLevel::DEFAULT_ASSESSED,
            ))
            .await
            .unwrap();
        assert!(uow.skills().delete(skill.id).await.unwrap());

        assert!(uow.roles().requirements(role.id).await.unwrap().is_empty());
        assert!(uow.employees().list_skills(emp.id).await.unwrap().is_empty());
        assert!(!uow.skills().delete(skill.id).await.unwrap());
    }

    #[tokio::test]
    async fn requirements_reject_unknown_skill() {
        let store = InMemoryWorkforceStore::new();
        let role = Role::create("Analyst", None, None, None).unwrap();

        let mut uow = store.begin().await.unwrap();
        uow.roles().insert(&role).await.unwrap();
        let err = uow
            .roles()
            .replace_requirements(
                role.id,
                &[RoleSkillRequirement::new(
                    role.id,
                    SkillId::new(),
                    ProficiencyLevel::DEFAULT_REQUIRED,
                )],
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SkillNotFound);
    }
}
