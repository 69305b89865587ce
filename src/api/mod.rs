//! API Module
//!
//! HTTP handlers and routing for the inventory REST API.
//!
//! # Endpoints
//! - `POST /items/` - Create an item
//! - `GET /items/:item_id` - Read an item, reporting which layer served it
//! - `GET /stats` - Cache and store statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
