//! Base repository traits following Interface Segregation Principle (ISP).
//!
//! These traits provide a foundation for all repositories with
//! common CRUD operations over a [`MemoryStore`] that can be composed
//! as needed.

use super::memory::MemoryStore;
use crate::domain::Entity;
use crate::errors::{AppResult, OptionExt};

/// Message used whenever an entity cannot be resolved by id
pub fn not_found_message<E: Entity>(id: i64) -> String {
    format!("There is no {} with id {}", E::KIND, id)
}

/// Access to the backing store
pub trait StoreBacked<E: Entity>: Send + Sync {
    fn store(&self) -> &MemoryStore<E>;
}

/// Read operations (Query) - Single Responsibility
pub trait ReadRepository<E: Entity>: StoreBacked<E> {
    /// All entities, in insertion order
    fn find_all(&self) -> Vec<E> {
        self.store().all()
    }

    /// Find entity by id
    fn find_by_id(&self, id: i64) -> AppResult<E> {
        self.store()
            .get(id)
            .ok_or_not_found(|| not_found_message::<E>(id))
    }

    /// Count all entities
    fn count_all(&self) -> usize {
        self.store().len()
    }
}

/// Write operations (Command) - Single Responsibility
pub trait WriteRepository<E: Entity>: StoreBacked<E> {
    /// Insert or overwrite by id
    fn insert(&self, entity: E) -> E {
        self.store().upsert(entity)
    }

    /// Overwrite every field of an existing entity
    fn replace(&self, entity: E) -> AppResult<E> {
        let id = entity.id();
        self.store()
            .replace(entity)
            .ok_or_not_found(|| not_found_message::<E>(id))
    }
}

/// Delete operations - Single Responsibility
pub trait DeleteRepository<E: Entity>: StoreBacked<E> {
    /// Delete entity by id
    fn remove_by_id(&self, id: i64) -> AppResult<E> {
        self.store()
            .remove(id)
            .ok_or_not_found(|| not_found_message::<E>(id))
    }
}

/// Full CRUD repository - Combines all operations
pub trait CrudRepository<E: Entity>:
    ReadRepository<E> + WriteRepository<E> + DeleteRepository<E>
{
}

// Auto-implement the operation traits for anything backed by a store
impl<T, E> ReadRepository<E> for T
where
    T: StoreBacked<E>,
    E: Entity,
{
}

impl<T, E> WriteRepository<E> for T
where
    T: StoreBacked<E>,
    E: Entity,
{
}

impl<T, E> DeleteRepository<E> for T
where
    T: StoreBacked<E>,
    E: Entity,
{
}

impl<T, E> CrudRepository<E> for T
where
    T: ReadRepository<E> + WriteRepository<E> + DeleteRepository<E>,
    E: Entity,
{
}
