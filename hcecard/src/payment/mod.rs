// hcecard/src/payment/mod.rs

pub mod decision;
pub mod session;

pub use decision::{DecisionSlot, Ticket, WaitOutcome};
pub use session::PaymentSessionState;
