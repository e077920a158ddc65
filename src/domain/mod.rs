//! Domain layer - core business logic.

pub mod chat;
pub mod foundation;
