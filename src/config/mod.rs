//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `PESISIR_INTAKE_` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use pesisir_intake::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod auth;
mod chat;
mod error;
mod forecast;
mod server;

pub use auth::AuthConfig;
pub use chat::ChatConfig;
pub use error::{ConfigError, ValidationError};
pub use forecast::ForecastConfig;
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has working defaults, so the service boots with no
/// environment variables set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, timeouts, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Chat session configuration (report numbering)
    #[serde(default)]
    pub chat: ChatConfig,

    /// Maritime forecast feed configuration
    #[serde(default)]
    pub forecast: ForecastConfig,

    /// Login credential configuration
    #[serde(default)]
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present, then reads environment variables with
    /// the `PESISIR_INTAKE` prefix using `__` to separate nested values.
    ///
    /// # Environment Variable Format
    ///
    /// - `PESISIR_INTAKE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PESISIR_INTAKE__CHAT__REPORT_NUMBER_BASE=2024000` -> `chat.report_number_base = 2024000`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PESISIR_INTAKE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.forecast.validate()?;
        self.auth.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("PESISIR_INTAKE__SERVER__PORT");
        env::remove_var("PESISIR_INTAKE__CHAT__REPORT_NUMBER_BASE");
        env::remove_var("PESISIR_INTAKE__AUTH__EMAIL");
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.chat.report_number_base, 2_024_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PESISIR_INTAKE__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_custom_report_number_base() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PESISIR_INTAKE__CHAT__REPORT_NUMBER_BASE", "2025000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.chat.report_number_base, 2_025_000);
    }
}
