// hcecard/src/ndef/encoder.rs

use crate::constants::{
    NDEF_RECORD_HEADER_TEXT, NDEF_SHORT_RECORD_MAX_PAYLOAD, NDEF_TEXT_LANGUAGE, NDEF_TYPE_TEXT,
    TLV_NDEF_MESSAGE, TLV_TERMINATOR,
};
use crate::{Error, Result};

/// Text record payload: status byte (language code length), language, text.
pub fn encode_text_record_payload(text: &str) -> Vec<u8> {
    let mut payload = Vec::with_capacity(1 + NDEF_TEXT_LANGUAGE.len() + text.len());
    payload.push(NDEF_TEXT_LANGUAGE.len() as u8);
    payload.extend_from_slice(NDEF_TEXT_LANGUAGE);
    payload.extend_from_slice(text.as_bytes());
    payload
}

/// Single short Text record forming a complete NDEF message.
/// Layout: header(1) + type_len(1) + payload_len(1) + type(1) + payload(n)
pub fn encode_text_message(text: &str) -> Result<Vec<u8>> {
    let payload = encode_text_record_payload(text);
    if payload.len() > NDEF_SHORT_RECORD_MAX_PAYLOAD {
        return Err(Error::PayloadTooLarge {
            max: NDEF_SHORT_RECORD_MAX_PAYLOAD,
            actual: payload.len(),
        });
    }

    let mut message = Vec::with_capacity(4 + payload.len());
    message.push(NDEF_RECORD_HEADER_TEXT);
    message.push(1); // type length
    message.push(payload.len() as u8);
    message.push(NDEF_TYPE_TEXT);
    message.extend_from_slice(&payload);
    Ok(message)
}

/// NDEF file content for `text`: `03 LEN_HI LEN_LO <message> FE`
pub fn encode_text_tlv(text: &str) -> Result<Vec<u8>> {
    let message = encode_text_message(text)?;
    let len = message.len() as u16;

    let mut out = Vec::with_capacity(3 + message.len() + 1);
    out.push(TLV_NDEF_MESSAGE);
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(&message);
    out.push(TLV_TERMINATOR);
    Ok(out)
}
