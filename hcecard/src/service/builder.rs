// hcecard/src/service/builder.rs

use std::sync::Arc;

use crate::config::Options;
use crate::ndef::NdefStore;
use crate::notify::{NoopNotifier, Notifier};
use crate::payment::DecisionSlot;
use crate::service::{Controller, HostApduService, NdefTagService, PaymentService};

/// Helper to wire both services and the controller around shared state.
pub struct EmulatorBuilder {
    notifier: Option<Arc<dyn Notifier>>,
    options: Options,
    ndef: Option<NdefStore>,
}

impl EmulatorBuilder {
    pub fn new() -> Self {
        Self {
            notifier: None,
            options: Options::default(),
            ndef: None,
        }
    }

    /// Channel for payment events. Without one, events are dropped.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Share an existing NDEF store instead of creating an empty one.
    pub fn with_ndef_store(mut self, store: NdefStore) -> Self {
        self.ndef = Some(store);
        self
    }

    pub fn build(self) -> Emulator {
        let notifier = self.notifier.unwrap_or_else(|| Arc::new(NoopNotifier));
        let decisions = DecisionSlot::new();
        let ndef = self.ndef.unwrap_or_default();

        Emulator {
            payment: Arc::new(PaymentService::new(
                notifier,
                decisions.clone(),
                self.options,
            )),
            ndef: Arc::new(NdefTagService::new(ndef.clone())),
            controller: Controller::new(decisions, ndef),
        }
    }
}

impl Default for EmulatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Both emulated applications plus the controller feeding them.
#[derive(Debug, Clone)]
pub struct Emulator {
    payment: Arc<PaymentService>,
    ndef: Arc<NdefTagService>,
    controller: Controller,
}

impl Emulator {
    pub fn builder() -> EmulatorBuilder {
        EmulatorBuilder::new()
    }

    pub fn payment(&self) -> &Arc<PaymentService> {
        &self.payment
    }

    pub fn ndef(&self) -> &Arc<NdefTagService> {
        &self.ndef
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Service registered for `aid`, if any. Exact match only.
    pub fn service_for(&self, aid: &[u8]) -> Option<Arc<dyn HostApduService>> {
        if self.payment.aid().matches(aid) {
            Some(self.payment.clone())
        } else if self.ndef.aid().matches(aid) {
            Some(self.ndef.clone())
        } else {
            None
        }
    }
}
