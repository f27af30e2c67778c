use serde::{Deserialize, Serialize};

use crate::model::common::{CompanyId, EmployeeId, Entity, EntityRef};

/// An employee, optionally belonging to one company. The `company` field is
/// the child side of the association; it serializes as a nested id-bearing
/// object and is excluded from partial-update merges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Employee {
    pub id: Option<EmployeeId>,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub pancard: Option<i64>,
    pub company: Option<EntityRef<CompanyId>>,
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl Entity for Employee {
    type Key = EmployeeId;

    const ENTITY_NAME: &'static str = "employee";
    const PLURAL: &'static str = "employees";

    fn id(&self) -> Option<&EmployeeId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: EmployeeId) {
        self.id = Some(id);
    }

    fn merge(&mut self, patch: Self) {
        if let Some(name) = patch.name {
            self.name = Some(name);
        }
        if let Some(age) = patch.age {
            self.age = Some(age);
        }
        if let Some(gender) = patch.gender {
            self.gender = Some(gender);
        }
        if let Some(pancard) = patch.pancard {
            self.pancard = Some(pancard);
        }
    }

    fn missing_field(&self) -> Option<&'static str> {
        if self.name.is_none() {
            return Some("name");
        }
        None
    }
}
