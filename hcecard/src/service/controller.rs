// hcecard/src/service/controller.rs

use crate::ndef::NdefStore;
use crate::payment::DecisionSlot;
use crate::types::Decision;
use crate::Result;

/// Intake for the controlling application. Cheap to clone and safe to use
/// from any thread, independently of in-flight commands.
#[derive(Debug, Clone)]
pub struct Controller {
    decisions: DecisionSlot,
    ndef: NdefStore,
}

impl Controller {
    pub fn new(decisions: DecisionSlot, ndef: NdefStore) -> Self {
        Self { decisions, ndef }
    }

    /// Answer the pending payment request. `payload` is sent to the reader
    /// verbatim, followed by `90 00`.
    pub fn submit_decision(&self, approved: bool, payload: impl Into<Vec<u8>>) {
        self.decisions.resolve(Decision::new(approved, payload));
    }

    /// Replace the NDEF file content with raw bytes (already TLV framed).
    pub fn set_ndef_payload(&self, content: impl Into<Vec<u8>>) {
        self.ndef.set(content);
    }

    /// Publish `text` as a single NDEF Text record.
    pub fn set_ndef_text(&self, text: &str) -> Result<()> {
        self.ndef.set_text(text)
    }

    pub fn clear_ndef_payload(&self) {
        self.ndef.clear();
    }
}
