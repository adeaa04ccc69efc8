//! Timeout helpers.
//!
//! The decision timeout bounds how long a PAYMENT command blocks the host
//! callback. Contactless readers often give up far sooner than this; hosts
//! should override it through [`crate::config::Options`] to fit their field.

use std::time::Duration;

/// Default bound on the wait for an approval decision, in milliseconds.
pub const DEFAULT_DECISION_TIMEOUT_MS: u64 = 30_000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

pub fn default_decision_timeout() -> Duration {
    ms(DEFAULT_DECISION_TIMEOUT_MS)
}
