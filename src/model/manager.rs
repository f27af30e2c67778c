use serde::{Deserialize, Serialize};

use crate::model::common::{Entity, ManagerId};

/// A manager. Identified by a random UUID rather than a sequence; the workers
/// it owns live in the link index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manager {
    pub id: Option<ManagerId>,
    pub name: Option<String>,
    /// Expected range 20-50; advisory only, the store does not enforce it.
    pub age: Option<i32>,
    pub gender: Option<String>,
}

impl PartialEq for Manager {
    fn eq(&self, other: &Self) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl Entity for Manager {
    type Key = ManagerId;

    const ENTITY_NAME: &'static str = "manager";
    const PLURAL: &'static str = "managers";

    fn id(&self) -> Option<&ManagerId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: ManagerId) {
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
    }

    fn missing_field(&self) -> Option<&'static str> {
        if self.gender.is_none() {
            return Some("gender");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn equals_only_on_shared_identity() {
        let id = Uuid::new_v4();
        let manager1 = Manager {
            id: Some(id),
            name: Some("name1".into()),
            gender: Some("M".into()),
            ..Manager::default()
        };
        let mut manager2 = Manager::default();
        assert_ne!(manager1, manager2);

        manager2.id = Some(id);
        assert_eq!(manager1, manager2);

        manager2.id = Some(Uuid::new_v4());
        assert_ne!(manager1, manager2);
    }

    #[test]
    fn merge_follows_null_means_absent() {
        let mut stored = Manager {
            id: Some(Uuid::new_v4()),
            name: Some("A".into()),
            age: Some(30),
            gender: Some("M".into()),
        };

        stored.merge(Manager {
            id: stored.id,
            age: Some(31),
            ..Manager::default()
        });

        assert_eq!(stored.name.as_deref(), Some("A"));
        assert_eq!(stored.age, Some(31));
        assert_eq!(stored.gender.as_deref(), Some("M"));
    }

    #[test]
    fn gender_is_required() {
        assert_eq!(Manager::default().missing_field(), Some("gender"));
    }
}
