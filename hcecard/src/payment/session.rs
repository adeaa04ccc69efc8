// hcecard/src/payment/session.rs

use crate::protocol::Response;

/// Where the payment exchange stands.
///
/// `Idle -> AwaitingDecision -> {Resolved | TimedOut}`; deactivation and the
/// start of every PAYMENT command bring it back to `Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PaymentSessionState {
    #[default]
    Idle,
    AwaitingDecision,
    Resolved(Response),
    TimedOut,
}

impl PaymentSessionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self, Self::AwaitingDecision)
    }
}
