//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate the repositories to fulfill application use
//! cases. They depend on abstractions (traits) for dependency inversion
//! and reach the repositories through the Unit of Work.

pub mod container;
mod pet_service;
mod store_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use pet_service::{ImageUpload, PetManager, PetService};
pub use store_service::{StoreManager, StoreService};
pub use user_service::{UserManager, UserService};
