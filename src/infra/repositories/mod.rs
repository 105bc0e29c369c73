//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over the in-memory stores,
//! following the Repository pattern for clean separation of concerns.

mod base;
pub mod memory;
mod order_repository;
mod pet_repository;
mod user_repository;

pub use base::{
    not_found_message, CrudRepository, DeleteRepository, ReadRepository, StoreBacked,
    WriteRepository,
};
pub use memory::MemoryStore;
pub use order_repository::{OrderRepository, OrderStore};
pub use pet_repository::{PetRepository, PetStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use order_repository::MockOrderRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use pet_repository::MockPetRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
