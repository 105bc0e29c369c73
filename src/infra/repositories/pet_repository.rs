//! Pet repository: CRUD plus status/tag filtering.

use super::base::{not_found_message, DeleteRepository, ReadRepository, StoreBacked, WriteRepository};
use super::memory::MemoryStore;
use crate::domain::{Pet, PetStatus};
use crate::errors::{AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Pet repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait PetRepository: Send + Sync {
    /// All pets, in insertion order
    fn list(&self) -> Vec<Pet>;

    /// Find pet by id
    fn get_by_id(&self, id: i64) -> AppResult<Pet>;

    /// Insert or overwrite by id
    fn save(&self, pet: Pet) -> Pet;

    /// Overwrite an existing pet
    fn update(&self, pet: Pet) -> AppResult<Pet>;

    /// Delete pet by id
    fn delete_by_id(&self, id: i64) -> AppResult<()>;

    /// Pets whose status is one of `statuses`
    fn get_by_status(&self, statuses: &[PetStatus]) -> Vec<Pet>;

    /// Pets carrying at least one tag named in `tag_names`
    fn get_by_tags(&self, tag_names: &[String]) -> Vec<Pet>;

    /// Overwrite name and/or status of an existing pet
    fn update_with_form(
        &self,
        id: i64,
        name: Option<String>,
        status: Option<PetStatus>,
    ) -> AppResult<Pet>;

    /// Append an uploaded image to the pet's photo URLs
    fn attach_image(&self, id: i64, file_name: String) -> AppResult<Pet>;

    /// Number of stored pets
    fn count(&self) -> usize;
}

/// In-memory implementation of PetRepository
#[derive(Default)]
pub struct PetStore {
    store: MemoryStore<Pet>,
}

impl PetStore {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `pets`
    pub fn with_pets(pets: impl IntoIterator<Item = Pet>) -> Self {
        Self {
            store: MemoryStore::with_entries(pets),
        }
    }
}

impl StoreBacked<Pet> for PetStore {
    fn store(&self) -> &MemoryStore<Pet> {
        &self.store
    }
}

impl PetRepository for PetStore {
    fn list(&self) -> Vec<Pet> {
        self.find_all()
    }

    fn get_by_id(&self, id: i64) -> AppResult<Pet> {
        self.find_by_id(id)
    }

    fn save(&self, pet: Pet) -> Pet {
        tracing::debug!(pet_id = pet.id, "Saving pet");
        self.insert(pet)
    }

    fn update(&self, pet: Pet) -> AppResult<Pet> {
        self.replace(pet)
    }

    fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.remove_by_id(id).map(|_| ())
    }

    fn get_by_status(&self, statuses: &[PetStatus]) -> Vec<Pet> {
        self.store.filter(|pet| statuses.contains(&pet.status))
    }

    fn get_by_tags(&self, tag_names: &[String]) -> Vec<Pet> {
        self.store.filter(|pet| pet.has_any_tag(tag_names))
    }

    fn update_with_form(
        &self,
        id: i64,
        name: Option<String>,
        status: Option<PetStatus>,
    ) -> AppResult<Pet> {
        self.store
            .modify(id, |pet| {
                if let Some(name) = name {
                    pet.name = name;
                }
                if let Some(status) = status {
                    pet.status = status;
                }
            })
            .ok_or_not_found(|| not_found_message::<Pet>(id))
    }

    fn attach_image(&self, id: i64, file_name: String) -> AppResult<Pet> {
        self.store
            .modify(id, |pet| pet.photo_urls.push(file_name))
            .ok_or_not_found(|| not_found_message::<Pet>(id))
    }

    fn count(&self) -> usize {
        self.count_all()
    }
}
