//! Core traits shared across layers.

use crate::KontextResult;
use async_trait::async_trait;

/// Base repository trait for CRUD operations.
///
/// This trait defines the standard operations that all repositories
/// implement, following the Repository pattern. The operations are explicit
/// in the contract rather than inherited implicitly; entity-specific
/// repository traits extend this one and add nothing unless the entity
/// needs custom queries.
#[async_trait]
pub trait Repository<T, ID>: Send + Sync
where
    T: Send + Sync,
    ID: Send + Sync,
{
    /// Finds an entity by its ID. An absent id yields `Ok(None)`, not an
    /// error.
    async fn find_by_id(&self, id: ID) -> KontextResult<Option<T>>;

    /// Finds all entities.
    async fn find_all(&self) -> KontextResult<Vec<T>>;

    /// Saves a new entity. The store assigns the identifier; the returned
    /// entity carries it.
    async fn save(&self, entity: &T) -> KontextResult<T>;

    /// Updates an existing entity.
    async fn update(&self, entity: &T) -> KontextResult<T>;

    /// Deletes an entity by its ID. Returns whether a record was removed.
    async fn delete_by_id(&self, id: ID) -> KontextResult<bool>;

    /// Checks if an entity exists by its ID.
    async fn exists(&self, id: ID) -> KontextResult<bool>;

    /// Counts all entities.
    async fn count(&self) -> KontextResult<u64>;
}

/// Trait for entities with a unique identifier.
pub trait Entity<ID> {
    /// Returns the entity's unique identifier.
    fn id(&self) -> &ID;
}
