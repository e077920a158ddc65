//! HTTP adapters - REST API surface per module.

pub mod auth;
pub mod chat;
pub mod forecast;

pub use auth::auth_routes;
pub use chat::{chat_routes, ChatHandlers};
pub use forecast::{forecast_routes, ForecastHandlers};
