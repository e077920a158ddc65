//! Sequential report-number issuance.

use serde::{Deserialize, Serialize};

/// Default base for report numbers: year prefix plus a running sequence.
pub const DEFAULT_REPORT_NUMBER_BASE: u32 = 2_024_000;

/// Issues monotonically increasing report numbers for one session.
///
/// The first accepted turn gets `base + 1`. Numbers are never decremented,
/// reused, or reset within the session's lifetime. Each session owns its
/// own sequencer; independent sessions never share a counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSequencer {
    current: u32,
}

impl ReportSequencer {
    /// Creates a sequencer starting at the given base.
    pub fn new(base: u32) -> Self {
        Self { current: base }
    }

    /// Issues the next report number.
    pub fn next(&mut self) -> u32 {
        self.current += 1;
        self.current
    }

    /// Returns the last issued report number, or the base if none issued.
    pub fn current(&self) -> u32 {
        self.current
    }
}

impl Default for ReportSequencer {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_NUMBER_BASE)
    }
}
