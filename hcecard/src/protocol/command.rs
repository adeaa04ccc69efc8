// hcecard/src/protocol/command.rs

use crate::constants::{
    APDU_DATA_OFFSET, APDU_HEADER_LEN, APDU_LC_OFFSET, CLA_ISO, CLA_PROPRIETARY, INS_PAYMENT,
    INS_READ_BINARY, INS_SELECT, READ_BINARY_DEFAULT_LE,
};
use crate::protocol::parser;
use crate::Result;

/// The four mandatory bytes of a command APDU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub cla: u8,
    pub ins: u8,
    pub p1: u8,
    pub p2: u8,
}

impl Header {
    /// Parse the header of a raw command. Fails with `MalformedCommand` when
    /// fewer than four bytes are present.
    pub fn parse(apdu: &[u8]) -> Result<Self> {
        parser::ensure_len(apdu, APDU_HEADER_LEN)?;
        Ok(Self {
            cla: apdu[0],
            ins: apdu[1],
            p1: apdu[2],
            p2: apdu[3],
        })
    }

    pub fn kind(&self) -> CommandKind {
        match (self.cla, self.ins) {
            (CLA_ISO, INS_SELECT) => CommandKind::Select,
            (CLA_ISO, INS_READ_BINARY) => CommandKind::ReadBinary,
            (CLA_PROPRIETARY, INS_PAYMENT) => CommandKind::Payment,
            _ => CommandKind::Unknown,
        }
    }

    pub fn params(&self) -> (u8, u8) {
        (self.p1, self.p2)
    }
}

/// Class/instruction pairs the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Select,
    ReadBinary,
    Payment,
    Unknown,
}

/// A decoded command: header, data body (possibly empty) and optional Le.
///
/// Byte 4, when present, is read as Lc. Commands whose byte 4 is an Le
/// (READ BINARY) go through [`ReadBinary::from_apdu`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    header: Header,
    data: Vec<u8>,
    le: Option<u8>,
}

impl Command {
    pub fn new(cla: u8, ins: u8, p1: u8, p2: u8) -> Self {
        Self {
            header: Header { cla, ins, p1, p2 },
            data: Vec::new(),
            le: None,
        }
    }

    pub fn with_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }

    pub fn with_le(mut self, le: u8) -> Self {
        self.le = Some(le);
        self
    }

    /// Decode a raw command buffer.
    ///
    /// - fewer than 4 bytes: `MalformedCommand`
    /// - byte 4 present: it is Lc and the buffer must hold `5 + Lc` bytes
    /// - a byte following the data body is taken as Le
    pub fn decode(apdu: &[u8]) -> Result<Self> {
        let header = Header::parse(apdu)?;

        let Some(&lc) = apdu.get(APDU_LC_OFFSET) else {
            return Ok(Self {
                header,
                data: Vec::new(),
                le: None,
            });
        };

        let data = parser::slice_at(apdu, APDU_DATA_OFFSET, lc as usize)?.to_vec();
        let le = apdu.get(APDU_DATA_OFFSET + lc as usize).copied();

        Ok(Self { header, data, le })
    }

    /// Serialize as a short APDU. Lc is emitted only for a non-empty body.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(APDU_DATA_OFFSET + self.data.len() + 1);
        out.extend_from_slice(&[self.header.cla, self.header.ins, self.header.p1, self.header.p2]);
        if !self.data.is_empty() {
            out.push(self.data.len() as u8);
            out.extend_from_slice(&self.data);
        }
        if let Some(le) = self.le {
            out.push(le);
        }
        out
    }

    pub fn header(&self) -> Header {
        self.header
    }

    pub fn class(&self) -> u8 {
        self.header.cla
    }

    pub fn instruction(&self) -> u8 {
        self.header.ins
    }

    pub fn p1(&self) -> u8 {
        self.header.p1
    }

    pub fn p2(&self) -> u8 {
        self.header.p2
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn expected_response_length(&self) -> Option<u8> {
        self.le
    }
}

/// READ BINARY request: offset from P1/P2, length from byte 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadBinary {
    pub offset: usize,
    pub len: usize,
}

impl ReadBinary {
    pub fn from_apdu(apdu: &[u8]) -> Result<Self> {
        let offset = parser::be_u16_at(apdu, 2)? as usize;
        let len = match apdu.get(APDU_LC_OFFSET) {
            Some(&le) => le as usize,
            None => READ_BINARY_DEFAULT_LE,
        };
        Ok(Self { offset, len })
    }
}
