//! Order repository with pet reference checks.

use std::sync::Arc;

use super::base::{DeleteRepository, ReadRepository, StoreBacked, WriteRepository};
use super::memory::MemoryStore;
use super::pet_repository::PetRepository;
use crate::domain::{Order, OrderStatus, Pet};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Order repository trait for dependency injection.
///
/// Every write resolves `order.pet_id` first; an unknown pet fails the
/// whole operation with the pet's not-found error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait OrderRepository: Send + Sync {
    /// All orders, in insertion order
    fn list(&self) -> Vec<Order>;

    /// Find order by id
    fn get_by_id(&self, id: i64) -> AppResult<Order>;

    /// Insert or overwrite by id, once the referenced pet resolves
    fn save(&self, order: Order) -> AppResult<Order>;

    /// Overwrite an existing order, once the referenced pet resolves
    fn update(&self, order: Order) -> AppResult<Order>;

    /// Delete order by id
    fn delete_by_id(&self, id: i64) -> AppResult<()>;

    /// Pets referenced by orders in `status`, one entry per order
    fn get_pets_by_order_status(&self, status: OrderStatus) -> AppResult<Vec<Pet>>;

    /// Number of stored orders
    fn count(&self) -> usize;
}

/// In-memory implementation of OrderRepository
pub struct OrderStore {
    store: MemoryStore<Order>,
    pets: Arc<dyn PetRepository>,
}

impl OrderStore {
    /// Create an empty repository validating against `pets`
    pub fn new(pets: Arc<dyn PetRepository>) -> Self {
        Self {
            store: MemoryStore::new(),
            pets,
        }
    }

    /// Create a repository holding `orders`.
    ///
    /// The initial orders are not checked against `pets`.
    pub fn with_orders(pets: Arc<dyn PetRepository>, orders: impl IntoIterator<Item = Order>) -> Self {
        Self {
            store: MemoryStore::with_entries(orders),
            pets,
        }
    }
}

impl StoreBacked<Order> for OrderStore {
    fn store(&self) -> &MemoryStore<Order> {
        &self.store
    }
}

impl OrderRepository for OrderStore {
    fn list(&self) -> Vec<Order> {
        self.find_all()
    }

    fn get_by_id(&self, id: i64) -> AppResult<Order> {
        self.find_by_id(id)
    }

    fn save(&self, order: Order) -> AppResult<Order> {
        self.pets.get_by_id(order.pet_id)?;
        tracing::debug!(order_id = order.id, pet_id = order.pet_id, "Saving order");
        Ok(self.insert(order))
    }

    fn update(&self, order: Order) -> AppResult<Order> {
        self.pets.get_by_id(order.pet_id)?;
        self.replace(order)
    }

    fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.remove_by_id(id).map(|_| ())
    }

    fn get_pets_by_order_status(&self, status: OrderStatus) -> AppResult<Vec<Pet>> {
        // Collect ids first so the order lock is released before touching pets
        let pet_ids: Vec<i64> = self
            .store
            .filter(|order| order.status == status)
            .into_iter()
            .map(|order| order.pet_id)
            .collect();

        pet_ids
            .into_iter()
            .map(|pet_id| self.pets.get_by_id(pet_id))
            .collect()
    }

    fn count(&self) -> usize {
        self.count_all()
    }
}
