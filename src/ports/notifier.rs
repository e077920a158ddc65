//! EmergencyNotifier port - Interface for the advisory notification boundary.
//!
//! The escalation path only requires that the advisory with the canonical
//! emergency numbers reaches the presentation layer; delivery is
//! best-effort and a boundary failure must never abort a turn.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::chat::Advisory;

/// Errors surfaced by a notification boundary.
#[derive(Debug, Clone, Error)]
pub enum NotifyError {
    #[error("Advisory delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Port for delivering emergency advisories to the presentation layer.
#[async_trait]
pub trait EmergencyNotifier: Send + Sync {
    /// Delivers one advisory.
    ///
    /// Callers treat errors as a degraded path, not a turn failure.
    async fn notify(&self, advisory: Advisory) -> Result<(), NotifyError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that the trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn EmergencyNotifier) {}

    #[test]
    fn notify_error_displays_reason() {
        let err = NotifyError::DeliveryFailed("ui gone".to_string());
        assert_eq!(err.to_string(), "Advisory delivery failed: ui gone");
    }
}
