//! Tracing Notifier Adapter
//!
//! Surfaces emergency advisories through the structured log stream. The
//! service has no push channel of its own; advisories also travel to the
//! UI inside the turn response, so the log entry is the operator-facing
//! side of the boundary.

use async_trait::async_trait;
use tracing::warn;

use crate::domain::chat::Advisory;
use crate::ports::{EmergencyNotifier, NotifyError};

/// Notifier that logs advisories at `warn` level.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmergencyNotifier for TracingNotifier {
    async fn notify(&self, advisory: Advisory) -> Result<(), NotifyError> {
        warn!(
            title = %advisory.title,
            body = %advisory.body,
            "emergency advisory raised"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn notify_always_succeeds() {
        let notifier = TracingNotifier::new();
        assert!(notifier.notify(Advisory::emergency()).await.is_ok());
    }
}
