//! Generic CRUD operations shared by every resource: one component
//! parameterized over the entity and its identity type instead of one
//! near-identical service per entity. All identity and existence invariants
//! live here; handlers only translate HTTP.

use crate::api::error::ApiError;
use crate::model::Entity;
use crate::store::traits::EntityStore;

/// Create a new record. The identity must be absent; the store assigns it.
pub async fn create<T, S>(store: &S, entity: T) -> Result<T, ApiError>
where
    T: Entity,
    S: EntityStore<T> + ?Sized,
{
    if entity.id().is_some() {
        return Err(ApiError::id_exists(T::ENTITY_NAME));
    }
    if let Some(field) = entity.missing_field() {
        return Err(ApiError::missing_field(T::ENTITY_NAME, field));
    }
    Ok(store.save(entity).await?)
}

/// Full replace of an existing record. The body id must be present, match the
/// path id and refer to a stored record.
pub async fn update<T, S>(store: &S, path_id: &T::Key, entity: T) -> Result<T, ApiError>
where
    T: Entity,
    S: EntityStore<T> + ?Sized,
{
    let id = entity.id().ok_or_else(|| ApiError::id_null(T::ENTITY_NAME))?;
    if id != path_id {
        return Err(ApiError::id_invalid(T::ENTITY_NAME));
    }
    if !store.exists_by_id(path_id).await? {
        return Err(ApiError::id_not_found(T::ENTITY_NAME));
    }
    if let Some(field) = entity.missing_field() {
        return Err(ApiError::missing_field(T::ENTITY_NAME, field));
    }
    Ok(store.save(entity).await?)
}

/// Merge-patch of an existing record: the same id checks as a full update,
/// then every non-null scalar attribute of the patch overwrites the stored
/// value. Attributes the patch leaves null stay as they are.
pub async fn partial_update<T, S>(store: &S, path_id: &T::Key, patch: T) -> Result<T, ApiError>
where
    T: Entity,
    S: EntityStore<T> + ?Sized,
{
    let id = patch
        .id()
        .ok_or_else(|| ApiError::id_null(T::ENTITY_NAME))?
        .clone();
    if &id != path_id {
        return Err(ApiError::id_invalid(T::ENTITY_NAME));
    }
    if !store.exists_by_id(path_id).await? {
        return Err(ApiError::id_not_found(T::ENTITY_NAME));
    }
    let mut existing = store
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::id_not_found(T::ENTITY_NAME))?;
    existing.merge(patch);
    Ok(store.save(existing).await?)
}

pub async fn get_all<T, S>(store: &S) -> Result<Vec<T>, ApiError>
where
    T: Entity,
    S: EntityStore<T> + ?Sized,
{
    Ok(store.find_all().await?)
}

/// Absence is a regular outcome here, never an error.
pub async fn get_one<T, S>(store: &S, id: &T::Key) -> Result<Option<T>, ApiError>
where
    T: Entity,
    S: EntityStore<T> + ?Sized,
{
    Ok(store.find_by_id(id).await?)
}

/// Idempotent at the transport level: deleting an id that is already gone is
/// the same success as deleting it the first time.
pub async fn delete<T, S>(store: &S, id: &T::Key) -> Result<(), ApiError>
where
    T: Entity,
    S: EntityStore<T> + ?Sized,
{
    store.delete_by_id(id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Company, Manager, Workers};
    use crate::store::memory::MemoryStore;
    use crate::store::traits::EntityStore;
    use uuid::Uuid;

    fn manager(name: &str, age: i32, gender: &str) -> Manager {
        Manager {
            id: None,
            name: Some(name.into()),
            age: Some(age),
            gender: Some(gender.into()),
        }
    }

    #[tokio::test]
    async fn create_assigns_identity_and_has_no_memory() {
        let store = MemoryStore::new();
        let template = manager("A", 30, "M");

        let first = create(&store, template.clone()).await.unwrap();
        assert!(first.id.is_some());

        // The original, still-id-less value can be created again
        // independently.
        let second = create(&store, template).await.unwrap();
        assert!(second.id.is_some());
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn create_rejects_preset_identity() {
        let store = MemoryStore::new();
        let mut entity = manager("A", 30, "M");
        entity.id = Some(Uuid::new_v4());

        let err = create(&store, entity).await.unwrap_err();
        assert_eq!(err.error_key(), Some("idexists"));
        assert_eq!(EntityStore::<Manager>::count(&store).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn create_checks_required_fields() {
        let store = MemoryStore::new();
        let err = create(
            &store,
            Company {
                place: Some("berlin".into()),
                ..Company::default()
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.error_key(), Some("required"));
    }

    #[tokio::test]
    async fn update_enforces_identity_invariants() {
        let store = MemoryStore::new();
        let saved = create(&store, manager("A", 30, "M")).await.unwrap();
        let saved_id = saved.id.unwrap();

        let mut body = saved.clone();
        body.id = None;
        let err = update(&store, &saved_id, body).await.unwrap_err();
        assert_eq!(err.error_key(), Some("idnull"));

        let err = update(&store, &Uuid::new_v4(), saved.clone())
            .await
            .unwrap_err();
        assert_eq!(err.error_key(), Some("idinvalid"));

        let mut phantom = saved.clone();
        let phantom_id = Uuid::new_v4();
        phantom.id = Some(phantom_id);
        let err = update(&store, &phantom_id, phantom).await.unwrap_err();
        assert_eq!(err.error_key(), Some("idnotfound"));

        // Store untouched by the failures.
        assert_eq!(EntityStore::<Manager>::count(&store).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn update_replaces_in_full() {
        let store = MemoryStore::new();
        let saved = create(&store, manager("A", 30, "M")).await.unwrap();
        let saved_id = saved.id.unwrap();

        let replacement = Manager {
            id: Some(saved_id),
            name: None,
            age: Some(45),
            gender: Some("F".into()),
        };
        let updated = update(&store, &saved_id, replacement).await.unwrap();

        // Full replace: the cleared name really is gone.
        assert_eq!(updated.name, None);
        assert_eq!(updated.age, Some(45));
    }

    #[tokio::test]
    async fn partial_update_merges_present_attributes_only() {
        let store = MemoryStore::new();
        let saved = create(&store, manager("A", 30, "M")).await.unwrap();
        let saved_id = saved.id.unwrap();

        let patch = Manager {
            id: Some(saved_id),
            age: Some(31),
            ..Manager::default()
        };
        let merged = partial_update(&store, &saved_id, patch).await.unwrap();

        assert_eq!(merged.name.as_deref(), Some("A"));
        assert_eq!(merged.age, Some(31));
        assert_eq!(merged.gender.as_deref(), Some("M"));

        let stored: Manager = get_one(&store, &saved_id).await.unwrap().unwrap();
        assert_eq!(stored.age, Some(31));
    }

    #[tokio::test]
    async fn partial_update_enforces_identity_invariants() {
        let store = MemoryStore::new();
        let saved = create(&store, manager("A", 30, "M")).await.unwrap();
        let saved_id = saved.id.unwrap();

        let err = partial_update(
            &store,
            &saved_id,
            Manager {
                age: Some(31),
                ..Manager::default()
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.error_key(), Some("idnull"));

        let err = partial_update(
            &store,
            &Uuid::new_v4(),
            Manager {
                id: Some(saved_id),
                ..Manager::default()
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.error_key(), Some("idinvalid"));
    }

    #[tokio::test]
    async fn get_one_signals_absence_without_fault() {
        let store = MemoryStore::new();
        let found: Option<Workers> = get_one(&store, &99).await.unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryStore::new();
        let saved = create(
            &store,
            Workers {
                name: Some("w".into()),
                ..Workers::default()
            },
        )
        .await
        .unwrap();
        let id = saved.id.unwrap();

        delete::<Workers, _>(&store, &id).await.unwrap();
        delete::<Workers, _>(&store, &id).await.unwrap();
        assert_eq!(EntityStore::<Workers>::count(&store).await.unwrap(), 0);
    }
}
