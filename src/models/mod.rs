//! Request and Response models for the cache server API
//!
//! DTOs used for serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

pub use requests::{SetRequest, MAX_KEY_LENGTH, MAX_VALUE_SIZE};
pub use responses::{
    ClearResponse, ErrorResponse, GetResponse, HealthResponse, SetResponse, StatsResponse,
};
