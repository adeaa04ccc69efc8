// hcecard/src/notify/event.rs

use crate::types::DeactivationReason;

/// Fire-and-forget notifications for the controlling application.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "event", rename_all = "snake_case"))]
pub enum Event {
    /// A reader selected the payment application.
    MerchantDetected,
    /// A PAYMENT command arrived; a decision is now awaited.
    PaymentRequested { payload: String },
    Deactivated { reason: DeactivationReason },
}

impl Event {
    /// Stable name, matching the method names a bridge would dispatch on.
    pub fn name(&self) -> &'static str {
        match self {
            Event::MerchantDetected => "merchant_detected",
            Event::PaymentRequested { .. } => "payment_requested",
            Event::Deactivated { .. } => "deactivated",
        }
    }
}
