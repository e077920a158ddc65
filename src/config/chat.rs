//! Chat configuration

use serde::Deserialize;

use crate::domain::chat::DEFAULT_REPORT_NUMBER_BASE;

/// Chat session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Base value for per-session report numbers
    #[serde(default = "default_report_number_base")]
    pub report_number_base: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            report_number_base: default_report_number_base(),
        }
    }
}

fn default_report_number_base() -> u32 {
    DEFAULT_REPORT_NUMBER_BASE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_config_defaults() {
        let config = ChatConfig::default();
        assert_eq!(config.report_number_base, 2_024_000);
    }
}
