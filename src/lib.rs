//! Petstore - An in-memory pet store REST API
//!
//! Pets, store orders and users are kept in thread-safe in-memory stores
//! and exposed through CRUD-style HTTP endpoints built on Axum.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Pets, orders, users and their validation rules
//! - **services**: Application use cases
//! - **infra**: In-memory stores, repositories and seed data
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server with seed data
//! cargo run -- serve
//!
//! # Start on another port with empty stores
//! cargo run -- serve --port 9090 --no-seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Order, OrderStatus, Pet, PetStatus, User};
pub use errors::{AppError, AppResult};
pub use infra::Persistence;
