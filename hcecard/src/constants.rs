// hcecard/src/constants.rs
//! Protocol constants shared by both emulated applications

/// Payment application AID: F0 01 02 03 04 05 06
pub const PAYMENT_AID: [u8; 7] = [0xF0, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06];

/// NFC Forum Type 4 Tag NDEF application AID: D2 76 00 00 85 01 01
pub const NDEF_AID: [u8; 7] = [0xD2, 0x76, 0x00, 0x00, 0x85, 0x01, 0x01];

/// Capability Container file id
pub const CC_FILE_ID: u16 = 0xE103;

/// NDEF file id
pub const NDEF_FILE_ID: u16 = 0xE104;

/// Interindustry class byte
pub const CLA_ISO: u8 = 0x00;
/// Proprietary class byte used by the payment exchange
pub const CLA_PROPRIETARY: u8 = 0x80;

pub const INS_SELECT: u8 = 0xA4;
pub const INS_READ_BINARY: u8 = 0xB0;
pub const INS_PAYMENT: u8 = 0x01;

/// SELECT P1/P2 for selection by DF name (AID)
pub const SELECT_BY_NAME: (u8, u8) = (0x04, 0x00);
/// SELECT P1/P2 for selection by file id, first occurrence, no FCI
pub const SELECT_BY_FILE_ID: (u8, u8) = (0x00, 0x0C);

/// CLA INS P1 P2
pub const APDU_HEADER_LEN: usize = 4;
pub const APDU_LC_OFFSET: usize = 4;
pub const APDU_DATA_OFFSET: usize = 5;

/// Header + Lc + 7-byte AID; shorter payment SELECTs are rejected outright.
pub const PAYMENT_SELECT_MIN_LEN: usize = APDU_DATA_OFFSET + PAYMENT_AID.len();

/// READ BINARY length used when the command carries no Le byte.
pub const READ_BINARY_DEFAULT_LE: usize = 256;

/// Capability Container layout (Type 4 Tag mapping version 2.0)
pub const CC_LEN: u16 = 0x000F;
pub const CC_MAPPING_VERSION: u8 = 0x20;
pub const CC_MAX_R_APDU: u16 = 0x00FF;
pub const CC_MAX_C_APDU: u16 = 0x00FF;
pub const CC_NDEF_FILE_CONTROL_TAG: u8 = 0x04;
pub const CC_NDEF_FILE_CONTROL_LEN: u8 = 0x06;
pub const CC_MAX_NDEF_SIZE: u16 = 0x00FF;
pub const CC_READ_ACCESS_ALWAYS: u8 = 0x00;
pub const CC_WRITE_ACCESS_NEVER: u8 = 0xFF;

/// NDEF record header: MB | ME | SR, TNF = well-known
pub const NDEF_RECORD_HEADER_TEXT: u8 = 0xD1;
/// Well-known type "T"
pub const NDEF_TYPE_TEXT: u8 = b'T';
pub const NDEF_TEXT_LANGUAGE: &[u8] = b"en";

/// TLV tag for an NDEF message and the terminator TLV
pub const TLV_NDEF_MESSAGE: u8 = 0x03;
pub const TLV_TERMINATOR: u8 = 0xFE;

/// Short records carry their payload length in a single byte.
pub const NDEF_SHORT_RECORD_MAX_PAYLOAD: usize = 255;
