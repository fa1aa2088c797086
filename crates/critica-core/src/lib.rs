//! Shared HTTP plumbing for the critica API: health handlers, request-id
//! middleware, tracing setup and serialization helpers.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
