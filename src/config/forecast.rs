//! Maritime forecast configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upstream maritime forecast feed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastConfig {
    /// Public forecast feed URL
    #[serde(default = "default_feed_url")]
    pub feed_url: String,

    /// Upstream request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ForecastConfig {
    /// Get the upstream request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate forecast configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.feed_url.starts_with("http://") && !self.feed_url.starts_with("https://") {
            return Err(ValidationError::InvalidFeedUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidForecastTimeout);
        }
        Ok(())
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_feed_url() -> String {
    "https://peta-maritim.bmkg.go.id/public_api/perairan/H.07_Samudera%20Hindia%20selatan%20Jawa%20Tengah.json"
        .to_string()
}

fn default_timeout() -> u64 {
    10
}
