//! Emergency-keyword escalation.
//!
//! Every inbound message is checked against a fixed lexicon before normal
//! processing. A hit emits an advisory through the notification boundary and
//! then lets the turn proceed unchanged; escalation is an additive side
//! channel, never a branch in intent routing.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ports::EmergencyNotifier;

use super::matcher::matches_any;

/// Trigger words that indicate an active emergency.
///
/// Static configuration, immutable, shared by all sessions. Some entries
/// overlap the classification rules (e.g. "korban"); the two mechanisms are
/// deliberately independent and may both fire for the same message.
pub const EMERGENCY_LEXICON: &[&str] = &[
    "darurat",
    "korban",
    "terseret",
    "tenggelam",
    "tolong",
    "selamatkan",
    "sos",
];

/// Result of evaluating one message against the emergency lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationOutcome {
    pub triggered: bool,
}

/// Advisory payload handed to the notification boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub title: String,
    pub body: String,
    pub actions: Vec<String>,
}

impl Advisory {
    /// The fixed emergency-numbers advisory shown on every escalation.
    pub fn emergency() -> Self {
        Self {
            title: "PERINGATAN DARURAT!".to_string(),
            body: "Untuk keadaan darurat, segera hubungi:\n\n\
                   BASARNAS: 115\n\
                   SAR: 129\n\n\
                   Lanjutkan melaporkan situasi di sini setelah menghubungi nomor darurat."
                .to_string(),
            actions: vec!["Mengerti".to_string()],
        }
    }
}

/// Inspects inbound messages and raises the emergency advisory.
///
/// Idempotent per call: there is no session-level cooldown or dedup, so
/// every matching message re-triggers the advisory.
pub struct EmergencyEscalator {
    notifier: Arc<dyn EmergencyNotifier>,
}

impl EmergencyEscalator {
    pub fn new(notifier: Arc<dyn EmergencyNotifier>) -> Self {
        Self { notifier }
    }

    /// Evaluates a message, notifying on a lexicon hit.
    ///
    /// Delivery is best-effort: a notifier failure is logged and swallowed
    /// so the conversational turn is never blocked or aborted.
    pub async fn evaluate(&self, text: &str) -> EscalationOutcome {
        let triggered = matches_any(text, EMERGENCY_LEXICON);
        if triggered {
            if let Err(e) = self.notifier.notify(Advisory::emergency()).await {
                warn!(error = %e, "emergency advisory delivery failed");
            }
        }
        EscalationOutcome { triggered }
    }
}
