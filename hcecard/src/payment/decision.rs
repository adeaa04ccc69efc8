// hcecard/src/payment/decision.rs

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::types::Decision;

/// Single-slot mailbox between the command-processing context (blocks in
/// [`DecisionSlot::wait`]) and the controlling application (writes with
/// [`DecisionSlot::resolve`] from any thread).
///
/// At most one decision is pending. Each payment cycle obtains a [`Ticket`];
/// starting a new cycle or cancelling invalidates older tickets and wakes
/// their waiter.
#[derive(Debug, Clone, Default)]
pub struct DecisionSlot {
    shared: Arc<Shared>,
}

#[derive(Debug, Default)]
struct Shared {
    state: Mutex<SlotState>,
    changed: Condvar,
}

#[derive(Debug, Default)]
struct SlotState {
    pending: Option<Decision>,
    cycle: u64,
}

/// Identifies one payment cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome {
    Decided(Decision),
    TimedOut,
    Cancelled,
}

impl DecisionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new cycle: drop any stale decision and invalidate older tickets.
    pub fn begin(&self) -> Ticket {
        let mut state = self.lock();
        state.pending = None;
        state.cycle = state.cycle.wrapping_add(1);
        let ticket = Ticket(state.cycle);
        drop(state);
        self.shared.changed.notify_all();
        ticket
    }

    /// Store a decision, overwriting any unconsumed one.
    pub fn resolve(&self, decision: Decision) {
        info!(
            "decision received: approved={}, {} byte payload",
            decision.approved,
            decision.payload.len()
        );
        self.lock().pending = Some(decision);
        self.shared.changed.notify_all();
    }

    /// Clear the slot and release the current waiter, if any.
    pub fn cancel(&self) {
        let mut state = self.lock();
        state.pending = None;
        state.cycle = state.cycle.wrapping_add(1);
        drop(state);
        debug!("decision slot cancelled");
        self.shared.changed.notify_all();
    }

    /// Block until a decision for `ticket` arrives, the ticket is invalidated,
    /// or `timeout` elapses. A decision is consumed exactly once.
    pub fn wait(&self, ticket: Ticket, timeout: Duration) -> WaitOutcome {
        let deadline = Instant::now().checked_add(timeout);
        let mut state = self.lock();
        loop {
            if state.cycle != ticket.0 {
                return WaitOutcome::Cancelled;
            }
            if let Some(decision) = state.pending.take() {
                return WaitOutcome::Decided(decision);
            }

            state = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return WaitOutcome::TimedOut;
                    }
                    let (guard, _) = self
                        .shared
                        .changed
                        .wait_timeout(state, deadline - now)
                        .unwrap_or_else(PoisonError::into_inner);
                    guard
                }
                None => self
                    .shared
                    .changed
                    .wait(state)
                    .unwrap_or_else(PoisonError::into_inner),
            };
        }
    }

    /// Whether `ticket` still names the running cycle.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.lock().cycle == ticket.0
    }

    pub fn has_pending(&self) -> bool {
        self.lock().pending.is_some()
    }

    fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.shared.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
