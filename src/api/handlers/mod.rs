//! HTTP request handlers.

pub mod pet_handler;
pub mod store_handler;
pub mod user_handler;

pub use pet_handler::pet_routes;
pub use store_handler::store_routes;
pub use user_handler::user_routes;
