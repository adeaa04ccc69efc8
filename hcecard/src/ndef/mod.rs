// hcecard/src/ndef/mod.rs
//! NFC Forum Type 4 Tag building blocks: NDEF file encoding, the Capability
//! Container, and the shared NDEF file cell.

pub mod capability;
pub mod encoder;
pub mod store;

pub use capability::{CAPABILITY_CONTAINER_LEN, capability_container};
pub use encoder::{encode_text_message, encode_text_record_payload, encode_text_tlv};
pub use store::NdefStore;
