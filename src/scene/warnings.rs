//! Rate-limited warning sink.
//!
//! Soft per-frame conditions (missing normals, bbox requested without
//! vertex data) can fire every frame; flooding the log with them helps
//! nobody. Each scene owns one of these, so two scenes never share rate
//! state.

use std::collections::HashMap;

/// After this many occurrences a message goes quiet for good.
const REPORT_LIMIT: u32 = 4;

#[derive(Debug, Default)]
pub struct WarningSink {
    counts: HashMap<String, u32>,
}

impl WarningSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs `message` via [`log::warn!`], deduplicating by exact text.
    /// The first three occurrences are emitted, the fourth emits a final
    /// notice, and everything after is dropped.
    pub fn warn(&mut self, message: &str) {
        let count = self.counts.entry(message.to_string()).or_insert(0);
        *count += 1;

        if *count == REPORT_LIMIT {
            log::warn!("no longer reporting '{message}' because of frequency");
        } else if *count < REPORT_LIMIT {
            log::warn!("{message}");
        }
    }

    /// How many times a message has fired, reported or not.
    pub fn occurrences(&self, message: &str) -> u32 {
        self.counts.get(message).copied().unwrap_or(0)
    }
}
