// hcecard/src/protocol/status.rs

use derive_more::{Display, From};

/// Two-byte trailer of every response (SW1 SW2).
#[derive(Debug, Display, From, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{:04X}", _0)]
pub struct StatusWord(u16);

impl StatusWord {
    /// 90 00
    pub const SUCCESS: Self = Self(0x9000);
    /// 6F 00, no precise diagnosis
    pub const GENERIC_FAILURE: Self = Self(0x6F00);
    /// 6A 82, application not found
    pub const NOT_FOUND: Self = Self(0x6A82);
    /// 6A 82, file not found. Same code as `NOT_FOUND`; kept separate so call
    /// sites say which lookup failed.
    pub const FILE_NOT_FOUND: Self = Self(0x6A82);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn to_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    pub fn is_success(&self) -> bool {
        *self == Self::SUCCESS
    }
}
