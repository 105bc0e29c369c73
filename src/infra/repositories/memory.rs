//! Lock-guarded, insertion-ordered in-memory map.
//!
//! Each store owns one `RwLock<IndexMap>`. Every public method takes the
//! lock exactly once and never calls out while holding it, so a store can
//! be shared freely behind an `Arc` across request handlers.

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::domain::Entity;

/// Keyed collection of entities of one type.
pub struct MemoryStore<T: Entity> {
    entries: RwLock<IndexMap<i64, T>>,
}

impl<T: Entity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> MemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(IndexMap::new()),
        }
    }

    /// Create a store pre-loaded with `entities`, in iteration order
    pub fn with_entries(entities: impl IntoIterator<Item = T>) -> Self {
        let entries = entities
            .into_iter()
            .map(|entity| (entity.id(), entity))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Snapshot of every entity, in insertion order
    pub fn all(&self) -> Vec<T> {
        self.entries.read().values().cloned().collect()
    }

    /// Snapshot of the entities matching `predicate`, in insertion order
    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.entries
            .read()
            .values()
            .filter(|entity| predicate(entity))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: i64) -> Option<T> {
        self.entries.read().get(&id).cloned()
    }

    /// First entity (in insertion order) matching `predicate`
    pub fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.entries
            .read()
            .values()
            .find(|entity| predicate(entity))
            .cloned()
    }

    /// Insert or replace by the entity's own id.
    ///
    /// A replaced entity keeps its original position.
    pub fn upsert(&self, entity: T) -> T {
        self.entries.write().insert(entity.id(), entity.clone());
        entity
    }

    /// Replace an existing entity; `None` if its id is not stored
    pub fn replace(&self, entity: T) -> Option<T> {
        let mut entries = self.entries.write();
        let slot = entries.get_mut(&entity.id())?;
        *slot = entity.clone();
        Some(entity)
    }

    /// Apply `change` to the entity stored under `id` and return the result
    pub fn modify<F>(&self, id: i64, change: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut entries = self.entries.write();
        let slot = entries.get_mut(&id)?;
        change(slot);
        Some(slot.clone())
    }

    /// Apply `change` to the first entity matching `predicate`.
    ///
    /// `change` must not alter the entity's id.
    pub fn modify_first<P, F>(&self, predicate: P, change: F) -> Option<T>
    where
        P: Fn(&T) -> bool,
        F: FnOnce(&mut T),
    {
        let mut entries = self.entries.write();
        let slot = entries.values_mut().find(|entity| predicate(entity))?;
        change(slot);
        Some(slot.clone())
    }

    /// Remove by id, keeping the order of the remaining entities
    pub fn remove(&self, id: i64) -> Option<T> {
        self.entries.write().shift_remove(&id)
    }

    /// Remove the first entity matching `predicate`
    pub fn remove_first<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        let mut entries = self.entries.write();
        let index = entries.values().position(|entity| predicate(entity))?;
        entries.shift_remove_index(index).map(|(_, entity)| entity)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: i64,
        label: &'static str,
    }

    impl Entity for Item {
        const KIND: &'static str = "item";

        fn id(&self) -> i64 {
            self.id
        }
    }

    fn item(id: i64, label: &'static str) -> Item {
        Item { id, label }
    }

    fn store() -> MemoryStore<Item> {
        MemoryStore::with_entries(vec![item(3, "c"), item(1, "a"), item(2, "b")])
    }

    #[test]
    fn test_all_keeps_insertion_order() {
        let ids: Vec<i64> = store().all().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = store();
        let mut snapshot = store.all();
        snapshot.clear();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_upsert_overwrites_in_place() {
        let store = store();
        store.upsert(item(1, "z"));
        store.upsert(item(4, "d"));

        let all = store.all();
        assert_eq!(all[1], item(1, "z"));
        assert_eq!(all[3], item(4, "d"));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_replace_requires_existing() {
        let store = store();
        assert!(store.replace(item(9, "x")).is_none());
        assert!(store.get(9).is_none());
        assert_eq!(store.replace(item(2, "y")), Some(item(2, "y")));
        assert_eq!(store.get(2), Some(item(2, "y")));
    }

    #[test]
    fn test_remove_preserves_order() {
        let store = store();
        assert_eq!(store.remove(1), Some(item(1, "a")));
        assert!(store.remove(1).is_none());
        let ids: Vec<i64> = store.all().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_predicate_helpers() {
        let store = store();
        assert_eq!(store.find(|i| i.label == "b"), Some(item(2, "b")));
        assert_eq!(store.filter(|i| i.id > 1).len(), 2);

        let changed = store.modify_first(|i| i.label == "a", |i| i.label = "aa");
        assert_eq!(changed, Some(item(1, "aa")));

        assert_eq!(store.remove_first(|i| i.label == "c"), Some(item(3, "c")));
        assert!(store.remove_first(|i| i.label == "c").is_none());
        assert!(store.modify(42, |i| i.label = "nope").is_none());
    }
}
