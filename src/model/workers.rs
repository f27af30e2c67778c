use serde::{Deserialize, Serialize};

use crate::model::common::{Entity, EntityRef, ManagerId, WorkerId};

/// A worker record, optionally belonging to one manager.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workers {
    pub id: Option<WorkerId>,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub manager: Option<EntityRef<ManagerId>>,
}

impl PartialEq for Workers {
    fn eq(&self, other: &Self) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl Entity for Workers {
    type Key = WorkerId;

    const ENTITY_NAME: &'static str = "workers";
    const PLURAL: &'static str = "workers";

    fn id(&self) -> Option<&WorkerId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: WorkerId) {
        self.id = Some(id);
    }

    fn merge(&mut self, patch: Self) {
        if let Some(name) = patch.name {
            self.name = Some(name);
        }
        if let Some(age) = patch.age {
            self.age = Some(age);
        }
    }

    fn missing_field(&self) -> Option<&'static str> {
        None
    }
}
