// hcecard/src/service/traits.rs

use log::{debug, warn};

use crate::protocol::Response;
use crate::types::{Aid, DeactivationReason};
use crate::utils::Hex;
use crate::Result;

/// An emulated application as seen by the host card-emulation runtime.
///
/// The host delivers one command at a time and waits for the returned bytes
/// before sending the next one. `on_deactivated` may arrive from another
/// thread while a command is still being processed.
pub trait HostApduService: Send + Sync {
    /// AID this service answers to.
    fn aid(&self) -> Aid;

    /// Process a raw command APDU and return the full response APDU
    /// (`[data..] SW1 SW2`). Never fails: every error becomes a status word.
    fn process_command_apdu(&self, apdu: &[u8]) -> Vec<u8>;

    /// The reader went away or selected another application.
    fn on_deactivated(&self, reason: DeactivationReason);

    /// Convenience for hosts that report the reason as a raw code.
    fn on_deactivated_code(&self, code: i32) {
        self.on_deactivated(DeactivationReason::from_code(code))
    }
}

/// Shared tail of `process_command_apdu`: trace the exchange and collapse the
/// handler result into exactly one response.
pub(crate) fn respond(service: &str, apdu: &[u8], result: Result<Response>) -> Vec<u8> {
    let response = result.unwrap_or_else(|err| {
        warn!("{}: {} -> {}", service, err, err.status_word());
        Response::from(err)
    });
    let bytes = response.into_bytes();
    debug!("{}: {} => {}", service, Hex(apdu), Hex(&bytes));
    bytes
}
