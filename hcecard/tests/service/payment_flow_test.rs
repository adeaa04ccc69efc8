use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use serial_test::serial;

use hcecard::notify::Event;
use hcecard::payment::PaymentSessionState;
use hcecard::protocol::builders;
use hcecard::service::HostApduService;
use hcecard::test_support::{recording_emulator, wait_until};
use hcecard::{Aid, DeactivationReason};

use crate::common::{fixtures, init_logger};

#[test]
fn select_announces_merchant() {
    init_logger();
    let (emulator, events) = recording_emulator(Duration::from_millis(50));
    let payment = emulator.payment();

    assert_eq!(
        payment.process_command_apdu(&fixtures::apdu(fixtures::SELECT_PAYMENT_APP)),
        fixtures::SW_SUCCESS
    );
    assert_eq!(events.events(), vec![Event::MerchantDetected]);

    // wrong AID, and a SELECT too short to carry an AID
    assert_eq!(
        payment.process_command_apdu(&builders::select_application(Aid::NDEF)),
        fixtures::SW_NOT_FOUND
    );
    assert_eq!(
        payment.process_command_apdu(&[0x00, 0xA4, 0x04, 0x00, 0x02, 0xF0, 0x01]),
        fixtures::SW_GENERIC_FAILURE
    );
    assert_eq!(events.len(), 1);
}

#[test]
#[serial]
fn payment_without_decision_times_out() {
    init_logger();
    let (emulator, events) = recording_emulator(Duration::from_millis(80));

    let started = Instant::now();
    let out = emulator
        .payment()
        .process_command_apdu(&builders::payment(fixtures::payment_request_json()));

    assert_eq!(out, fixtures::SW_GENERIC_FAILURE);
    assert!(started.elapsed() >= Duration::from_millis(80));
    assert_eq!(
        emulator.payment().session_state(),
        PaymentSessionState::TimedOut
    );
    assert_eq!(events.len(), 1);
}

#[test]
#[serial]
fn decision_payload_is_returned_to_reader() -> Result<()> {
    init_logger();
    let (emulator, events) = recording_emulator(Duration::from_secs(10));
    let payment = Arc::clone(emulator.payment());
    let controller = emulator.controller().clone();

    payment.process_command_apdu(&builders::select_application(Aid::PAYMENT));
    let reader = thread::spawn(move || {
        payment.process_command_apdu(&builders::payment(fixtures::payment_request_json()))
    });

    assert!(wait_until(Duration::from_secs(5), || events.len() == 2));
    let request = String::from_utf8(fixtures::payment_request_json().to_vec())?;
    assert_eq!(
        events.last(),
        Some(Event::PaymentRequested { payload: request })
    );

    controller.submit_decision(true, br#"{"status":"approved"}"#.to_vec());
    let out = reader
        .join()
        .map_err(|_| anyhow::anyhow!("reader thread panicked"))?;
    assert_eq!(out, fixtures::ok_with(br#"{"status":"approved"}"#));
    assert!(!emulator.payment().decisions().has_pending());
    Ok(())
}

#[test]
#[serial]
fn declined_decision_still_answers_success() -> Result<()> {
    let (emulator, events) = recording_emulator(Duration::from_secs(10));
    let payment = Arc::clone(emulator.payment());
    let controller = emulator.controller().clone();

    let reader = thread::spawn(move || payment.process_command_apdu(&builders::payment(b"{}")));
    assert!(wait_until(Duration::from_secs(5), || !events.is_empty()));
    controller.submit_decision(false, b"declined".to_vec());

    let out = reader
        .join()
        .map_err(|_| anyhow::anyhow!("reader thread panicked"))?;
    assert_eq!(out, fixtures::ok_with(b"declined"));
    Ok(())
}

#[test]
#[serial]
fn stale_decision_is_not_used_by_next_payment() {
    let (emulator, _events) = recording_emulator(Duration::from_millis(60));

    // arrives while nothing is pending
    emulator.controller().submit_decision(true, b"stale".to_vec());
    let out = emulator
        .payment()
        .process_command_apdu(&builders::payment(b"{}"));
    assert_eq!(out, fixtures::SW_GENERIC_FAILURE);
}

#[test]
#[serial]
fn deactivation_then_fresh_payment_starts_clean() -> Result<()> {
    init_logger();
    let (emulator, events) = recording_emulator(Duration::from_secs(10));
    let payment = Arc::clone(emulator.payment());

    let first = {
        let payment = Arc::clone(&payment);
        thread::spawn(move || payment.process_command_apdu(&builders::payment(b"first")))
    };
    assert!(wait_until(Duration::from_secs(5), || {
        payment.session_state().is_awaiting()
    }));

    payment.on_deactivated(DeactivationReason::LinkLoss);
    let out = first
        .join()
        .map_err(|_| anyhow::anyhow!("reader thread panicked"))?;
    assert_eq!(out, fixtures::SW_GENERIC_FAILURE);
    assert!(payment.session_state().is_idle());
    assert_eq!(
        events.last(),
        Some(Event::Deactivated {
            reason: DeactivationReason::LinkLoss
        })
    );

    // a decision meant for the dropped session must not leak into the next
    emulator.controller().submit_decision(true, b"late".to_vec());

    events.clear();
    let second = {
        let payment = Arc::clone(&payment);
        thread::spawn(move || payment.process_command_apdu(&builders::payment(b"second")))
    };
    assert!(wait_until(Duration::from_secs(5), || !events.is_empty()));
    emulator.controller().submit_decision(true, b"fresh".to_vec());

    let out = second
        .join()
        .map_err(|_| anyhow::anyhow!("reader thread panicked"))?;
    assert_eq!(out, fixtures::ok_with(b"fresh"));
    Ok(())
}

#[test]
fn payment_without_lc_is_malformed() {
    let (emulator, events) = recording_emulator(Duration::from_millis(10));
    assert_eq!(
        emulator
            .payment()
            .process_command_apdu(&[0x80, 0x01, 0x00, 0x00]),
        fixtures::SW_GENERIC_FAILURE
    );
    assert!(events.is_empty());
}
