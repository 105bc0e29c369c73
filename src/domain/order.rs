//! Store order entity.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Entity;
use crate::config::KIND_ORDER;
use crate::errors::AppError;

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[serde(alias = "placed")]
    Placed,
    #[serde(alias = "approved")]
    Approved,
    #[serde(alias = "delivered")]
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "PLACED",
            OrderStatus::Approved => "APPROVED",
            OrderStatus::Delivered => "DELIVERED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PLACED" => Ok(OrderStatus::Placed),
            "APPROVED" => Ok(OrderStatus::Approved),
            "DELIVERED" => Ok(OrderStatus::Delivered),
            _ => Err(AppError::invalid_resource(format!("Unknown order status {}", s))),
        }
    }
}

/// Purchase order for a single pet.
///
/// Holds the pet's id only; the order repository checks that it resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[validate(range(min = 1, message = "Order id must be positive"))]
    pub id: i64,
    pub pet_id: i64,
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i32,
    pub ship_date: NaiveDateTime,
    pub status: OrderStatus,
    pub complete: bool,
}

impl Entity for Order {
    const KIND: &'static str = KIND_ORDER;

    fn id(&self) -> i64 {
        self.id
    }
}
