use serde::{Deserialize, Serialize};

use crate::model::common::{CompanyId, Entity};

/// A company. The employee collection it owns lives in the link index, not in
/// the record, so the wire shape is scalar-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Company {
    pub id: Option<CompanyId>,
    pub name: Option<String>,
    pub place: Option<String>,
    pub domain: Option<String>,
}

// Records are equal only when both carry the same persisted identity; an
// unsaved record is not equal to anything, itself included, so Eq is
// deliberately not implemented.
impl PartialEq for Company {
    fn eq(&self, other: &Self) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl Entity for Company {
    type Key = CompanyId;

    const ENTITY_NAME: &'static str = "company";
    const PLURAL: &'static str = "companies";

    fn id(&self) -> Option<&CompanyId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: CompanyId) {
        self.id = Some(id);
    }

    fn merge(&mut self, patch: Self) {
        if let Some(name) = patch.name {
            self.name = Some(name);
        }
        if let Some(place) = patch.place {
            self.place = Some(place);
        }
        if let Some(domain) = patch.domain {
            self.domain = Some(domain);
        }
    }

    fn missing_field(&self) -> Option<&'static str> {
        if self.name.is_none() {
            return Some("name");
        }
        None
    }
}
