//! Adapters - concrete implementations of ports and outward-facing surfaces.

pub mod auth;
pub mod forecast;
pub mod http;
pub mod notify;
pub mod session;
