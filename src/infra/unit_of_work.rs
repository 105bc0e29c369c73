//! Unit of Work - Centralized repository access.
//!
//! Owns the three stores and wires the order repository to the pet
//! repository it validates against. One instance per process in
//! production, one per test.
//!
//! There are no transactions: every repository call is applied
//! immediately and bulk operations are not rolled back.

use std::sync::Arc;

use super::repositories::{
    OrderRepository, OrderStore, PetRepository, PetStore, UserRepository, UserStore,
};
use super::seed;
use crate::config::Config;

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get pet repository
    fn pets(&self) -> Arc<dyn PetRepository>;

    /// Get order repository
    fn orders(&self) -> Arc<dyn OrderRepository>;

    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;
}

/// Concrete implementation of UnitOfWork backed by in-memory stores
pub struct Persistence {
    pet_repo: Arc<PetStore>,
    order_repo: Arc<OrderStore>,
    user_repo: Arc<UserStore>,
}

impl Persistence {
    /// Create empty stores
    pub fn new() -> Self {
        let pet_repo = Arc::new(PetStore::new());
        let order_repo = Arc::new(OrderStore::new(pet_repo.clone()));
        let user_repo = Arc::new(UserStore::new());

        Self {
            pet_repo,
            order_repo,
            user_repo,
        }
    }

    /// Create stores loaded with the sample pets, orders and users
    pub fn seeded() -> Self {
        let pet_repo = Arc::new(PetStore::with_pets(seed::pets()));
        let order_repo = Arc::new(OrderStore::with_orders(pet_repo.clone(), seed::orders()));
        let user_repo = Arc::new(UserStore::with_users(seed::users()));

        tracing::info!(
            pets = pet_repo.count(),
            orders = order_repo.count(),
            users = user_repo.count(),
            "Stores seeded"
        );

        Self {
            pet_repo,
            order_repo,
            user_repo,
        }
    }

    /// Seeded or empty stores, as configured
    pub fn from_config(config: &Config) -> Self {
        if config.seed_data {
            Self::seeded()
        } else {
            Self::new()
        }
    }
}

impl Default for Persistence {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitOfWork for Persistence {
    fn pets(&self) -> Arc<dyn PetRepository> {
        self.pet_repo.clone()
    }

    fn orders(&self) -> Arc<dyn OrderRepository> {
        self.order_repo.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let uow = Persistence::new();
        assert_eq!(uow.pets().count(), 0);
        assert_eq!(uow.orders().count(), 0);
        assert_eq!(uow.users().count(), 0);
    }

    #[test]
    fn test_orders_validate_against_shared_pet_store() {
        let uow = Persistence::seeded();
        let mut order = uow.orders().get_by_id(1).unwrap();
        order.id = 10;

        uow.pets().delete_by_id(order.pet_id).unwrap();
        assert!(uow.orders().save(order).is_err());
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            seed_data: false,
            ..Config::default()
        };
        assert_eq!(Persistence::from_config(&config).pets().count(), 0);
        assert_eq!(Persistence::from_config(&Config::default()).pets().count(), 3);
    }
}
