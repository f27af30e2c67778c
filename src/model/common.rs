use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::hash::Hash;
use uuid::Uuid;

pub type CompanyId = i64;
pub type EmployeeId = i64;
pub type ManagerId = Uuid;
pub type WorkerId = i64;

/// Reference to a related record as it appears on the wire: a nested object
/// carrying the identity. The owning side's reciprocal collection is never
/// serialized, so references only ever point child-to-parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRef<K> {
    pub id: K,
}

impl<K> EntityRef<K> {
    pub fn new(id: K) -> Self {
        Self { id }
    }
}

/// Contract every stored record implements: identity access for the
/// repository port, the scalar-attribute merge used by partial updates, and
/// the required-field check applied on create and full update.
pub trait Entity: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Key: Clone
        + Eq
        + Hash
        + Ord
        + Display
        + Debug
        + Serialize
        + DeserializeOwned
        + Send
        + Sync
        + 'static;

    /// Singular name used in log lines, alert headers and error bodies.
    const ENTITY_NAME: &'static str;
    /// Plural path segment under `/api`.
    const PLURAL: &'static str;

    fn id(&self) -> Option<&Self::Key>;
    fn set_id(&mut self, id: Self::Key);

    /// Overwrite every scalar attribute that is non-null in `patch`, leaving
    /// the rest untouched. Relationship fields do not participate in the
    /// merge; an omitted field and an explicitly null field are
    /// indistinguishable, so a patch can never clear an attribute.
    fn merge(&mut self, patch: Self);

    /// First required attribute missing from the record, if any.
    fn missing_field(&self) -> Option<&'static str>;
}
