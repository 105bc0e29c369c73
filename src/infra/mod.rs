//! Infrastructure layer - Storage
//!
//! This module handles the in-memory stores behind the repositories:
//! - Lock-guarded entity stores and the repositories built on them
//! - Sample data loaded at startup
//! - Unit of Work owning one set of stores

pub mod repositories;
pub mod seed;
pub mod unit_of_work;

pub use repositories::{
    OrderRepository, OrderStore, PetRepository, PetStore, UserRepository, UserStore,
};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockOrderRepository, MockPetRepository, MockUserRepository};
