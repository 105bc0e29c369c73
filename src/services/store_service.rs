//! Store service - Handles order use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Order, OrderStatus, Pet};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// Store (orders) service trait for dependency injection.
#[async_trait]
pub trait StoreService: Send + Sync {
    async fn list_orders(&self) -> AppResult<Vec<Order>>;

    async fn get_order(&self, id: i64) -> AppResult<Order>;

    /// Place an order; the referenced pet must exist
    async fn place_order(&self, order: Order) -> AppResult<Order>;

    async fn update_order(&self, order: Order) -> AppResult<Order>;

    async fn delete_order(&self, id: i64) -> AppResult<()>;

    /// Pets referenced by orders in the given status
    async fn pets_by_order_status(&self, status: OrderStatus) -> AppResult<Vec<Pet>>;
}

/// Concrete implementation of StoreService using Unit of Work.
pub struct StoreManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> StoreManager<U> {
    /// Create new store service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> StoreService for StoreManager<U> {
    async fn list_orders(&self) -> AppResult<Vec<Order>> {
        Ok(self.uow.orders().list())
    }

    async fn get_order(&self, id: i64) -> AppResult<Order> {
        self.uow.orders().get_by_id(id)
    }

    async fn place_order(&self, order: Order) -> AppResult<Order> {
        let order = self.uow.orders().save(order)?;
        tracing::info!(order_id = order.id, pet_id = order.pet_id, "Order placed");
        Ok(order)
    }

    async fn update_order(&self, order: Order) -> AppResult<Order> {
        let order = self.uow.orders().update(order)?;
        tracing::info!(order_id = order.id, "Order updated");
        Ok(order)
    }

    async fn delete_order(&self, id: i64) -> AppResult<()> {
        self.uow.orders().delete_by_id(id)?;
        tracing::info!(order_id = id, "Order deleted");
        Ok(())
    }

    async fn pets_by_order_status(&self, status: OrderStatus) -> AppResult<Vec<Pet>> {
        self.uow.orders().get_pets_by_order_status(status)
    }
}
