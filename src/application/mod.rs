//! Application layer - use cases composed from domain logic and ports.

pub mod handlers;
