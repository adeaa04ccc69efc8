// hcecard/src/protocol/builders.rs
//! Reader-side command constructors. The engine never sends commands; these
//! exist so tests, benches and the demo speak the same framing as a reader.

use crate::constants::{
    CLA_ISO, CLA_PROPRIETARY, INS_PAYMENT, INS_READ_BINARY, INS_SELECT, SELECT_BY_FILE_ID,
    SELECT_BY_NAME,
};
use crate::types::{Aid, FileId};

use super::Command;

/// SELECT by DF name, with Le = 00 as most readers send it.
pub fn select_aid(aid: &[u8]) -> Vec<u8> {
    let (p1, p2) = SELECT_BY_NAME;
    Command::new(CLA_ISO, INS_SELECT, p1, p2)
        .with_data(aid)
        .with_le(0x00)
        .encode()
}

pub fn select_application(aid: Aid) -> Vec<u8> {
    select_aid(aid.as_bytes())
}

/// SELECT by file id, first occurrence, no response data.
pub fn select_file(id: FileId) -> Vec<u8> {
    let (p1, p2) = SELECT_BY_FILE_ID;
    Command::new(CLA_ISO, INS_SELECT, p1, p2)
        .with_data(id.to_be_bytes())
        .encode()
}

/// READ BINARY at `offset` for `le` bytes.
pub fn read_binary(offset: u16, le: u8) -> Vec<u8> {
    let [p1, p2] = offset.to_be_bytes();
    Command::new(CLA_ISO, INS_READ_BINARY, p1, p2)
        .with_le(le)
        .encode()
}

/// Proprietary PAYMENT command carrying an opaque payload. The Lc byte is
/// always present, also for an empty payload.
pub fn payment(payload: &[u8]) -> Vec<u8> {
    let mut out = vec![CLA_PROPRIETARY, INS_PAYMENT, 0x00, 0x00, payload.len() as u8];
    out.extend_from_slice(payload);
    out
}
