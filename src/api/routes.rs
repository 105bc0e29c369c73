//! Application route configuration.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use super::handlers::{pet_routes, store_routes, user_routes};
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/pet", pet_routes())
        .nest("/store/order", store_routes())
        .nest("/user", user_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Welcome to the Petstore API"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    stores: StoreCounts,
}

/// Entities held by each store
#[derive(Serialize)]
struct StoreCounts {
    pets: usize,
    orders: usize,
    users: usize,
}

/// Health check endpoint reporting store sizes
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let (pets, orders, users) = state.store_counts();

    Json(HealthResponse {
        status: "healthy",
        stores: StoreCounts {
            pets,
            orders,
            users,
        },
    })
}
