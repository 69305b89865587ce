//! Response models for the inventory API
//!
//! DTOs serialized into HTTP response bodies.

pub mod responses;

// Re-export commonly used types
pub use responses::{
    CreateItemResponse, ErrorResponse, GetItemResponse, HealthResponse, StatsResponse,
};
