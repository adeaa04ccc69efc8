use std::sync::Arc;
use std::sync::mpsc;
use std::sync::Mutex;
use std::time::Duration;

use hcecard::ndef::NdefStore;
use hcecard::notify::{Event, Notifier};
use hcecard::protocol::builders;
use hcecard::test_support::{recording_emulator, select_ndef_file};
use hcecard::{Aid, DeactivationReason, Emulator, FileId, HostApduService, Options};

use crate::common::fixtures;

#[test]
fn routes_by_exact_aid() {
    let emulator = Emulator::builder().build();

    let payment = emulator.service_for(Aid::PAYMENT.as_bytes()).unwrap();
    assert_eq!(payment.aid(), Aid::PAYMENT);
    let ndef = emulator.service_for(&fixtures::apdu("D2 76 00 00 85 01 01")).unwrap();
    assert_eq!(ndef.aid(), Aid::NDEF);

    // prefixes and extensions are not partial matches
    assert!(emulator.service_for(&Aid::NDEF.as_bytes()[..5]).is_none());
    assert!(emulator.service_for(&[0xD2, 0x76, 0x00, 0x00, 0x85, 0x01, 0x01, 0x00]).is_none());
}

#[test]
fn controller_publishes_text_to_tag() {
    let (emulator, events) = recording_emulator(Duration::from_millis(10));
    emulator.controller().set_ndef_text("hi").unwrap();

    let tag = emulator.service_for(Aid::NDEF.as_bytes()).unwrap();
    select_ndef_file(tag.as_ref(), FileId::NDEF);
    assert_eq!(
        tag.process_command_apdu(&builders::read_binary(0, 0xFF)),
        fixtures::ok_with(&fixtures::apdu(fixtures::HI_TLV))
    );

    emulator.controller().clear_ndef_payload();
    assert_eq!(
        tag.process_command_apdu(&builders::read_binary(0, 0xFF)),
        fixtures::SW_NOT_FOUND
    );
    // the tag application never talks to the controlling application
    assert!(events.is_empty());
}

#[test]
fn shared_store_and_options() {
    let store = NdefStore::new();
    store.set(fixtures::apdu(fixtures::HI_TLV));
    let emulator = Emulator::builder()
        .with_ndef_store(store.clone())
        .with_options(Options::new().with_decision_timeout(Duration::from_millis(5)))
        .build();

    assert!(emulator.ndef().store().is_set());
    assert_eq!(
        emulator.payment().options().decision_timeout,
        Duration::from_millis(5)
    );

    emulator.controller().set_ndef_payload(vec![0x03, 0x00, 0x00, 0xFE]);
    assert_eq!(store.snapshot().as_deref(), Some(&[0x03, 0x00, 0x00, 0xFE][..]));
}

#[test]
fn closure_notifier_receives_events() {
    let (tx, rx) = mpsc::channel();
    let tx = Mutex::new(tx);
    let notifier = move |event: Event| {
        if let Ok(tx) = tx.lock() {
            let _ = tx.send(event);
        }
    };
    let notifier: Arc<dyn Notifier> = Arc::new(notifier);
    let emulator = Emulator::builder().with_notifier(notifier).build();

    emulator
        .payment()
        .process_command_apdu(&builders::select_application(Aid::PAYMENT));
    emulator.payment().on_deactivated_code(0);

    assert_eq!(rx.recv().unwrap(), Event::MerchantDetected);
    assert_eq!(
        rx.recv().unwrap(),
        Event::Deactivated {
            reason: DeactivationReason::LinkLoss
        }
    );
}
