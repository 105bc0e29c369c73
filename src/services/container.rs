//! Service Container - Centralized service access.
//!
//! Builds every application service from one shared Unit of Work so
//! that all services see the same stores.

use std::sync::Arc;

use super::{PetManager, PetService, StoreManager, StoreService, UserManager, UserService};
use crate::infra::Persistence;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
pub trait ServiceContainer: Send + Sync {
    /// Get pet service
    fn pets(&self) -> Arc<dyn PetService>;

    /// Get store (orders) service
    fn store(&self) -> Arc<dyn StoreService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    pet_service: Arc<dyn PetService>,
    store_service: Arc<dyn StoreService>,
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Create a service container with manually injected services
    pub fn new(
        pet_service: Arc<dyn PetService>,
        store_service: Arc<dyn StoreService>,
        user_service: Arc<dyn UserService>,
    ) -> Self {
        Self {
            pet_service,
            store_service,
            user_service,
        }
    }

    /// Create service container over one set of stores
    pub fn from_persistence(uow: Arc<Persistence>) -> Self {
        Self {
            pet_service: Arc::new(PetManager::new(uow.clone())),
            store_service: Arc::new(StoreManager::new(uow.clone())),
            user_service: Arc::new(UserManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn pets(&self) -> Arc<dyn PetService> {
        self.pet_service.clone()
    }

    fn store(&self) -> Arc<dyn StoreService> {
        self.store_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}
