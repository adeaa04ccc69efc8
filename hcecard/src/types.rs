// hcecard/src/types.rs

use derive_more::{Display, From};

use crate::constants;

/// Application identifier - Newtype Pattern over a fixed byte string.
///
/// Matching is exact: same length, same content. No prefix (partial) selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Aid(&'static [u8]);

impl Aid {
    pub const PAYMENT: Self = Self(&constants::PAYMENT_AID);
    pub const NDEF: Self = Self(&constants::NDEF_AID);

    pub const fn new(bytes: &'static [u8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &'static [u8] {
        self.0
    }

    pub fn matches(&self, candidate: &[u8]) -> bool {
        self.0 == candidate
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.0)
    }
}

/// Elementary file id (u16, big-endian on the wire)
#[derive(Debug, Display, From, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{:04X}", _0)]
pub struct FileId(u16);

impl FileId {
    pub const CAPABILITY_CONTAINER: Self = Self(constants::CC_FILE_ID);
    pub const NDEF: Self = Self(constants::NDEF_FILE_ID);

    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Interpret a SELECT data body as a file id. Anything other than exactly
    /// two bytes names no file.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [hi, lo] => Some(Self(u16::from_be_bytes([*hi, *lo]))),
            _ => None,
        }
    }
}

/// Why the host tore down the link to the reader.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DeactivationReason {
    #[display(fmt = "link lost")]
    LinkLoss,
    #[display(fmt = "deselected")]
    Deselected,
    #[display(fmt = "unknown")]
    Unknown,
}

impl DeactivationReason {
    /// Map the numeric reason delivered by a host card-emulation runtime
    /// (0 = link loss, 1 = deselected).
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::LinkLoss,
            1 => Self::Deselected,
            _ => Self::Unknown,
        }
    }
}

/// Approval result handed over by the controlling application.
///
/// `payload` is opaque to the engine and becomes the response body verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    pub approved: bool,
    pub payload: Vec<u8>,
}

impl Decision {
    pub fn new(approved: bool, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            approved,
            payload: payload.into(),
        }
    }
}
