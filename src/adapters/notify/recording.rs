//! Recording Notifier Adapter
//!
//! Captures delivered advisories in memory so tests can assert trigger
//! conditions without a real presentation layer.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::chat::Advisory;
use crate::ports::{EmergencyNotifier, NotifyError};

/// Notifier that records every advisory it receives.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    advisories: Mutex<Vec<Advisory>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded advisories, oldest first.
    pub fn recorded(&self) -> Vec<Advisory> {
        self.advisories.lock().unwrap().clone()
    }

    /// Clears recorded advisories.
    pub fn clear(&self) {
        self.advisories.lock().unwrap().clear();
    }
}

#[async_trait]
impl EmergencyNotifier for RecordingNotifier {
    async fn notify(&self, advisory: Advisory) -> Result<(), NotifyError> {
        self.advisories.lock().unwrap().push(advisory);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_advisories_in_order() {
        let notifier = RecordingNotifier::new();
        let mut first = Advisory::emergency();
        first.title = "satu".to_string();
        let mut second = Advisory::emergency();
        second.title = "dua".to_string();

        notifier.notify(first).await.unwrap();
        notifier.notify(second).await.unwrap();

        let recorded = notifier.recorded();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].title, "satu");
        assert_eq!(recorded[1].title, "dua");
    }

    #[tokio::test]
    async fn clear_empties_the_record() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Advisory::emergency()).await.unwrap();
        notifier.clear();
        assert!(notifier.recorded().is_empty());
    }
}
