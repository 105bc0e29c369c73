//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and the stores
//! behind them.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Persistence, UnitOfWork};
use crate::services::{PetService, ServiceContainer, Services, StoreService, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Pet service
    pub pet_service: Arc<dyn PetService>,
    /// Store (orders) service
    pub store_service: Arc<dyn StoreService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Shared stores, read directly by the health check
    pub persistence: Arc<Persistence>,
}

impl AppState {
    /// Create application state from configuration.
    ///
    /// Stores are seeded when `config.seed_data` is set.
    pub fn from_config(config: &Config) -> Self {
        Self::from_persistence(Arc::new(Persistence::from_config(config)))
    }

    /// Create application state over an existing set of stores
    pub fn from_persistence(persistence: Arc<Persistence>) -> Self {
        let container = Services::from_persistence(persistence.clone());

        Self {
            pet_service: container.pets(),
            store_service: container.store(),
            user_service: container.users(),
            persistence,
        }
    }

    /// Number of pets, orders and users currently stored
    pub fn store_counts(&self) -> (usize, usize, usize) {
        (
            self.persistence.pets().count(),
            self.persistence.orders().count(),
            self.persistence.users().count(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_respects_seed_flag() {
        let seeded = AppState::from_config(&Config::default());
        assert_eq!(seeded.store_counts(), (3, 3, 3));

        let config = Config {
            seed_data: false,
            ..Config::default()
        };
        assert_eq!(AppState::from_config(&config).store_counts(), (0, 0, 0));
    }
}
