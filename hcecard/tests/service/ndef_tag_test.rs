use hcecard::ndef::NdefStore;
use hcecard::protocol::builders;
use hcecard::service::{HostApduService, NdefTagService, SelectionState};
use hcecard::test_support::select_ndef_file;
use hcecard::{DeactivationReason, FileId};

use crate::common::{fixtures, init_logger};

fn exchange(service: &NdefTagService, hex: &str) -> Vec<u8> {
    service.process_command_apdu(&fixtures::apdu(hex))
}

#[test]
fn reader_session_reads_capability_container() {
    init_logger();
    let service = NdefTagService::default();

    assert_eq!(exchange(&service, fixtures::SELECT_NDEF_APP), fixtures::SW_SUCCESS);
    assert_eq!(exchange(&service, fixtures::SELECT_CC_FILE), fixtures::SW_SUCCESS);
    assert_eq!(
        exchange(&service, fixtures::READ_CC),
        fixtures::ok_with(&fixtures::apdu(fixtures::CAPABILITY_CONTAINER))
    );
}

#[test]
fn reader_session_reads_text_in_chunks() {
    init_logger();
    let store = NdefStore::new();
    store.set_text("hi").unwrap();
    let service = NdefTagService::new(store);

    let (app, file) = select_ndef_file(&service, FileId::NDEF);
    assert_eq!(app, fixtures::SW_SUCCESS);
    assert_eq!(file, fixtures::SW_SUCCESS);

    // NLEN first, then the rest, as phones do
    let nlen = service.process_command_apdu(&builders::read_binary(0, 2));
    assert_eq!(nlen, fixtures::ok_with(&[0x03, 0x00]));
    let rest = service.process_command_apdu(&builders::read_binary(2, 0xFF));
    let expected = fixtures::apdu(fixtures::HI_TLV);
    assert_eq!(rest, fixtures::ok_with(&expected[2..]));
}

#[test]
fn read_past_end_is_empty_success() {
    let service = NdefTagService::default();
    select_ndef_file(&service, FileId::CAPABILITY_CONTAINER);

    assert_eq!(
        service.process_command_apdu(&builders::read_binary(15, 4)),
        fixtures::SW_SUCCESS
    );
    assert_eq!(
        service.process_command_apdu(&builders::read_binary(0x0100, 4)),
        fixtures::SW_SUCCESS
    );
}

#[test]
fn file_select_before_application_is_not_found() {
    let service = NdefTagService::default();
    assert_eq!(exchange(&service, fixtures::SELECT_CC_FILE), fixtures::SW_NOT_FOUND);
    assert_eq!(exchange(&service, fixtures::READ_CC), fixtures::SW_NOT_FOUND);
    assert_eq!(service.selection(), SelectionState::Unselected);
}

#[test]
fn foreign_aid_deselects() {
    let service = NdefTagService::default();
    select_ndef_file(&service, FileId::CAPABILITY_CONTAINER);

    assert_eq!(
        exchange(&service, fixtures::SELECT_PAYMENT_APP),
        fixtures::SW_NOT_FOUND
    );
    assert_eq!(exchange(&service, fixtures::READ_CC), fixtures::SW_NOT_FOUND);
}

#[test]
fn empty_ndef_file_answers_not_found() {
    let service = NdefTagService::default();
    select_ndef_file(&service, FileId::NDEF);
    assert_eq!(
        service.process_command_apdu(&builders::read_binary(0, 2)),
        fixtures::SW_NOT_FOUND
    );
}

#[test]
fn content_update_is_seen_by_next_read() {
    let store = NdefStore::new();
    let service = NdefTagService::new(store.clone());
    select_ndef_file(&service, FileId::NDEF);

    store.set(vec![0x03, 0x00, 0x00, 0xFE]);
    assert_eq!(
        service.process_command_apdu(&builders::read_binary(0, 4)),
        fixtures::ok_with(&[0x03, 0x00, 0x00, 0xFE])
    );

    store.clear();
    assert_eq!(
        service.process_command_apdu(&builders::read_binary(0, 4)),
        fixtures::SW_NOT_FOUND
    );
}

#[test]
fn deactivation_requires_fresh_selection() {
    let service = NdefTagService::default();
    select_ndef_file(&service, FileId::CAPABILITY_CONTAINER);

    service.on_deactivated_code(1);
    assert_eq!(exchange(&service, fixtures::READ_CC), fixtures::SW_NOT_FOUND);

    select_ndef_file(&service, FileId::CAPABILITY_CONTAINER);
    service.on_deactivated(DeactivationReason::LinkLoss);
    assert_eq!(service.selection(), SelectionState::Unselected);
}

#[test]
fn malformed_and_unknown_commands() {
    let service = NdefTagService::default();
    assert_eq!(
        service.process_command_apdu(&[0x00, 0xA4]),
        fixtures::SW_GENERIC_FAILURE
    );
    assert_eq!(
        service.process_command_apdu(&[0x00, 0xA4, 0x04, 0x00]),
        fixtures::SW_GENERIC_FAILURE
    );
    assert_eq!(
        service.process_command_apdu(&[0x00, 0xD6, 0x00, 0x00, 0x01, 0x00]),
        fixtures::SW_NOT_FOUND
    );
}
