// hcecard/src/protocol/response.rs

use super::StatusWord;

/// Response APDU: optional data body followed by exactly one status word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    data: Vec<u8>,
    status: StatusWord,
}

impl Response {
    /// Status word only.
    pub fn status(status: StatusWord) -> Self {
        Self {
            data: Vec::new(),
            status,
        }
    }

    pub fn success() -> Self {
        Self::status(StatusWord::SUCCESS)
    }

    /// Data body followed by `90 00`.
    pub fn success_with(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            status: StatusWord::SUCCESS,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn status_word(&self) -> StatusWord {
        self.status
    }

    /// Wire form: `[data..] SW1 SW2`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() + 2);
        out.extend_from_slice(&self.data);
        out.extend_from_slice(&self.status.to_bytes());
        out
    }

    pub fn into_bytes(self) -> Vec<u8> {
        let mut out = self.data;
        out.extend_from_slice(&self.status.to_bytes());
        out
    }

    /// Split a wire response into body and status word. Returns `None` for
    /// buffers shorter than a status word.
    pub fn parse(raw: &[u8]) -> Option<Self> {
        let split = raw.len().checked_sub(2)?;
        let (data, sw) = raw.split_at(split);
        Some(Self {
            data: data.to_vec(),
            status: StatusWord::new(u16::from_be_bytes([sw[0], sw[1]])),
        })
    }
}

impl From<crate::Error> for Response {
    fn from(err: crate::Error) -> Self {
        Self::status(err.status_word())
    }
}
