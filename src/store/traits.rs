use crate::model::{Company, Employee, Entity, Manager, Workers};
use anyhow::Result;

/// Abstract persistence contract, one instantiation per entity type. The
/// identity type is a generic parameter compared by value; implementations
/// assign a fresh identity on the first save of a record that has none.
#[async_trait::async_trait]
pub trait EntityStore<T: Entity>: Send + Sync {
    async fn find_by_id(&self, id: &T::Key) -> Result<Option<T>>;
    async fn find_all(&self) -> Result<Vec<T>>;
    /// Insert or full-replace by identity.
    async fn save(&self, entity: T) -> Result<T>;
    /// Returns whether a record was actually removed; deleting a missing key
    /// is not an error.
    async fn delete_by_id(&self, id: &T::Key) -> Result<bool>;
    async fn exists_by_id(&self, id: &T::Key) -> Result<bool>;
    async fn count(&self) -> Result<u64>;
}

pub trait Store:
    EntityStore<Company>
    + EntityStore<Employee>
    + EntityStore<Manager>
    + EntityStore<Workers>
    + Send
    + Sync
{
}

impl<S> Store for S where
    S: EntityStore<Company>
        + EntityStore<Employee>
        + EntityStore<Manager>
        + EntityStore<Workers>
        + Send
        + Sync
{
}
