//! Application handlers - use-case orchestration over domain and ports.

pub mod chat;
pub mod forecast;
