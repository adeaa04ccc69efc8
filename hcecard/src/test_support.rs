//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the usual emulator setup (recording notifier,
//! short decision timeout) and the reader-side command sequences so tests
//! across the crate and the tests/ directory share them.
#![allow(dead_code)]

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::Options;
use crate::notify::RecordingNotifier;
use crate::protocol::builders;
use crate::service::{Emulator, EmulatorBuilder, HostApduService};
use crate::types::{Aid, FileId};

/// Build an Emulator whose events land in the returned RecordingNotifier.
#[doc(hidden)]
pub fn recording_emulator(decision_timeout: Duration) -> (Emulator, RecordingNotifier) {
    let recorder = RecordingNotifier::new();
    let emulator = EmulatorBuilder::new()
        .with_notifier(Arc::new(recorder.clone()))
        .with_options(Options::new().with_decision_timeout(decision_timeout))
        .build();
    (emulator, recorder)
}

/// Run SELECT NDEF application then SELECT `file` and return both raw
/// responses.
#[doc(hidden)]
pub fn select_ndef_file(service: &dyn HostApduService, file: FileId) -> (Vec<u8>, Vec<u8>) {
    let app = service.process_command_apdu(&builders::select_application(Aid::NDEF));
    let file = service.process_command_apdu(&builders::select_file(file));
    (app, file)
}

/// Poll `cond` every millisecond until it holds or `limit` passes.
#[doc(hidden)]
pub fn wait_until(limit: Duration, mut cond: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + limit;
    while Instant::now() < deadline {
        if cond() {
            return true;
        }
        thread::sleep(Duration::from_millis(1));
    }
    cond()
}
