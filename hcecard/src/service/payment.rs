// hcecard/src/service/payment.rs

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info};

use crate::config::Options;
use crate::constants::{APDU_DATA_OFFSET, PAYMENT_SELECT_MIN_LEN};
use crate::notify::{Event, Notifier};
use crate::payment::{DecisionSlot, PaymentSessionState, WaitOutcome};
use crate::protocol::{Command, CommandKind, Header, Response, parser};
use crate::service::traits::{HostApduService, respond};
use crate::types::{Aid, DeactivationReason};
use crate::{Error, Result};

/// Payment application: answers SELECT for its AID and, for each PAYMENT
/// command, hands the payload to the controlling application and blocks until
/// a decision arrives or the configured timeout passes.
pub struct PaymentService {
    notifier: Arc<dyn Notifier>,
    decisions: DecisionSlot,
    session: Mutex<PaymentSessionState>,
    options: Options,
}

impl PaymentService {
    pub fn new(notifier: Arc<dyn Notifier>, decisions: DecisionSlot, options: Options) -> Self {
        Self {
            notifier,
            decisions,
            session: Mutex::new(PaymentSessionState::Idle),
            options,
        }
    }

    pub fn session_state(&self) -> PaymentSessionState {
        self.lock().clone()
    }

    pub fn decisions(&self) -> &DecisionSlot {
        &self.decisions
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Decode and execute one command.
    pub fn handle(&self, apdu: &[u8]) -> Result<Response> {
        let header = Header::parse(apdu)?;
        match header.kind() {
            CommandKind::Select => self.select(apdu),
            CommandKind::Payment => self.handle_payment(apdu),
            CommandKind::ReadBinary | CommandKind::Unknown => Err(Error::UnknownCommand {
                cla: header.cla,
                ins: header.ins,
            }),
        }
    }

    /// SELECT by AID. Shorter than header + Lc + AID is malformed.
    pub fn select(&self, apdu: &[u8]) -> Result<Response> {
        parser::ensure_len(apdu, PAYMENT_SELECT_MIN_LEN)?;
        let cmd = Command::decode(apdu)?;
        if !Aid::PAYMENT.matches(cmd.data()) {
            return Err(Error::ApplicationMismatch(cmd.data().to_vec()));
        }

        info!("payment: application selected");
        self.notifier.notify(Event::MerchantDetected);
        Ok(Response::success())
    }

    /// PAYMENT: notify, then wait for the decision. The response body is the
    /// decision payload, not the request.
    pub fn handle_payment(&self, apdu: &[u8]) -> Result<Response> {
        parser::ensure_len(apdu, APDU_DATA_OFFSET)?;
        let cmd = Command::decode(apdu)?;
        let payload = String::from_utf8_lossy(cmd.data()).into_owned();
        info!("payment: request received ({} bytes)", cmd.data().len());
        debug!("payment: request payload {}", payload);

        let ticket = {
            let mut session = self.lock();
            *session = PaymentSessionState::Idle;
            let ticket = self.decisions.begin();
            *session = PaymentSessionState::AwaitingDecision;
            ticket
        };
        self.notifier.notify(Event::PaymentRequested { payload });

        let timeout = self.options.decision_timeout;
        let outcome = self.decisions.wait(ticket, timeout);

        let mut session = self.lock();
        // A deactivation or newer request owns the session now; leave it be.
        let current = self.decisions.is_current(ticket);
        match outcome {
            WaitOutcome::Decided(decision) => {
                info!(
                    "payment: answering with decision (approved={})",
                    decision.approved
                );
                let response = Response::success_with(decision.payload);
                if current {
                    *session = PaymentSessionState::Resolved(response.clone());
                }
                Ok(response)
            }
            WaitOutcome::TimedOut => {
                if current {
                    *session = PaymentSessionState::TimedOut;
                }
                Err(Error::DecisionTimeout(timeout))
            }
            WaitOutcome::Cancelled => Err(Error::DecisionCancelled),
        }
    }

    fn lock(&self) -> MutexGuard<'_, PaymentSessionState> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for PaymentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentService")
            .field("decisions", &self.decisions)
            .field("session", &self.session)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl HostApduService for PaymentService {
    fn aid(&self) -> Aid {
        Aid::PAYMENT
    }

    fn process_command_apdu(&self, apdu: &[u8]) -> Vec<u8> {
        respond("payment", apdu, self.handle(apdu))
    }

    fn on_deactivated(&self, reason: DeactivationReason) {
        info!("payment: deactivated ({})", reason);
        {
            let mut session = self.lock();
            *session = PaymentSessionState::Idle;
            self.decisions.cancel();
        }
        self.notifier.notify(Event::Deactivated { reason });
    }
}
