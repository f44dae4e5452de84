//! Seeding helpers shared by handler tests.

use std::sync::Arc;

use crate::adapters::memory::InMemoryWorkforceStore;
use crate::domain::foundation::{EmployeeId, ProficiencyLevel, RoleId, SkillId};
use crate::domain::workforce::{
    Employee, EmployeeSkill, NewEmployee, Role, RoleSkillRequirement, Skill,
};
use crate::ports::WorkforceStore;

pub fn store() -> (InMemoryWorkforceStore, Arc<dyn WorkforceStore>) {
    let store = InMemoryWorkforceStore::new();
    let shared: Arc<dyn WorkforceStore> = Arc::new(store.clone());
    (store, shared)
}

pub fn level(value: i32) -> ProficiencyLevel {
    ProficiencyLevel::try_new(value).unwrap()
}

pub async fn seed_skill(store: &dyn WorkforceStore, name: &str, category: &str) -> SkillId {
    let skill = Skill::create(name, None, Some(category.to_string())).unwrap();
    let mut uow = store.begin().await.unwrap();
    uow.skills().insert(&skill).await.unwrap();
    uow.commit().await.unwrap();
    skill.id
}

pub async fn seed_role(
    store: &dyn WorkforceStore,
    title: &str,
    requirements: &[(SkillId, i32)],
) -> RoleId {
    let role = Role::create(title, None, None, None).unwrap();
    let reqs: Vec<RoleSkillRequirement> = requirements
        .iter()
        .map(|(skill, required)| RoleSkillRequirement::new(role.id, *skill, level(*required)))
        .collect();
    let mut uow = store.begin().await.unwrap();
    uow.roles().insert(&role).await.unwrap();
    uow.roles().replace_requirements(role.id, &reqs).await.unwrap();
    uow.commit().await.unwrap();
    role.id
}

pub async fn seed_employee(
    store: &dyn WorkforceStore,
    code: &str,
    role_id: Option<RoleId>,
    skills: &[(SkillId, i32)],
) -> EmployeeId {
    let employee = Employee::create(NewEmployee {
        employee_code: code.to_string(),
        first_name: "Emp".to_string(),
        last_name: code.to_string(),
        email: format!("{}@example.com", code.to_lowercase()),
        department: Some("Engineering".to_string()),
        role_id,
        hire_date: None,
    })
    .unwrap();
    let mut uow = store.begin().await.unwrap();
    uow.employees().insert(&employee).await.unwrap();
    for (skill, proficiency) in skills {
        uow.employees()
            .assign_skill(&EmployeeSkill::assessed_now(employee.id, *skill, level(*proficiency)))
            .await
            .unwrap();
    }
    uow.commit().await.unwrap();
    employee.id
}
