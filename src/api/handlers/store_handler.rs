//! Store (order) handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::api::extractors::{Path, Query, ValidatedJson};
use crate::api::AppState;
use crate::domain::{Order, OrderStatus, Pet};
use crate::errors::{AppError, AppResult};
use crate::types::{Created, NoContent};

/// Query parameters for the inventory lookup
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryQuery {
    pub order_status: Option<String>,
}

/// Create order routes
pub fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(place_order).put(update_order))
        .route("/inventory", get(inventory))
        .route("/:order_id", get(get_order).delete(delete_order))
}

pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    let orders = state.store_service.list_orders().await?;
    Ok(Json(orders))
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> AppResult<Json<Order>> {
    let order = state.store_service.get_order(order_id).await?;
    Ok(Json(order))
}

/// Place an order for an existing pet
pub async fn place_order(
    State(state): State<AppState>,
    ValidatedJson(order): ValidatedJson<Order>,
) -> AppResult<Created<Order>> {
    let order = state.store_service.place_order(order).await?;
    Ok(Created(order))
}

pub async fn update_order(
    State(state): State<AppState>,
    ValidatedJson(order): ValidatedJson<Order>,
) -> AppResult<Json<Order>> {
    let order = state.store_service.update_order(order).await?;
    Ok(Json(order))
}

pub async fn delete_order(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> AppResult<NoContent> {
    state.store_service.delete_order(order_id).await?;
    Ok(NoContent)
}

/// Pets referenced by orders in the given status
pub async fn inventory(
    State(state): State<AppState>,
    Query(query): Query<InventoryQuery>,
) -> AppResult<Json<Vec<Pet>>> {
    let status: OrderStatus = query
        .order_status
        .ok_or_else(|| AppError::invalid_resource("orderStatus parameter is required"))?
        .parse()?;

    let pets = state.store_service.pets_by_order_status(status).await?;
    Ok(Json(pets))
}
