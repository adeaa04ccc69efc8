// hcecard/src/config.rs

use std::time::Duration;

use crate::utils::default_decision_timeout;

/// Engine options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    /// Upper bound a PAYMENT command waits for the controlling application.
    pub decision_timeout: Duration,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decision_timeout(mut self, timeout: Duration) -> Self {
        self.decision_timeout = timeout;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            decision_timeout: default_decision_timeout(),
        }
    }
}
