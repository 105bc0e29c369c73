//! Domain layer - Core business entities and logic
//!
//! This module contains the Petstore models (pets, orders, users),
//! their field-level validation rules, and the [`Entity`] contract
//! the in-memory stores are keyed on.

pub mod order;
pub mod pet;
pub mod user;
pub mod validation;

pub use order::{Order, OrderStatus};
pub use pet::{Category, Pet, PetStatus, Tag};
pub use user::User;

/// A value that lives in a keyed store.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable name used in not-found messages ("pet", "order", "user")
    const KIND: &'static str;

    /// Identifier the entity is keyed by
    fn id(&self) -> i64;
}
