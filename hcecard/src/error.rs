// hcecard/src/error.rs

use std::time::Duration;

use thiserror::Error;

use crate::protocol::StatusWord;
use crate::types::FileId;

/// Common error type
///
/// Every variant is local to one command exchange. Services turn it into a
/// status word with [`Error::status_word`] before anything reaches the host.
#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed command: expected at least {expected} bytes, got {actual}")]
    MalformedCommand { expected: usize, actual: usize },

    #[error("application not found: {}", crate::utils::bytes_to_hex(.0))]
    ApplicationMismatch(Vec<u8>),

    #[error("file not found: {}", crate::utils::bytes_to_hex(.0))]
    FileMismatch(Vec<u8>),

    #[error("no application or file selected")]
    NotSelected,

    #[error("file {0} has no content")]
    EmptyFile(FileId),

    #[error("unsupported select parameters: p1={p1:#04x}, p2={p2:#04x}")]
    UnsupportedSelect { p1: u8, p2: u8 },

    #[error("no decision within {0:?}")]
    DecisionTimeout(Duration),

    #[error("decision wait cancelled")]
    DecisionCancelled,

    #[error("unknown command: cla={cla:#04x}, ins={ins:#04x}")]
    UnknownCommand { cla: u8, ins: u8 },

    #[error("payload too large: max {max} bytes, got {actual}")]
    PayloadTooLarge { max: usize, actual: usize },
}

impl Error {
    /// Status word reported to the reader for this failure.
    pub fn status_word(&self) -> StatusWord {
        match self {
            Error::MalformedCommand { .. }
            | Error::UnsupportedSelect { .. }
            | Error::DecisionTimeout(_)
            | Error::DecisionCancelled
            | Error::PayloadTooLarge { .. } => StatusWord::GENERIC_FAILURE,
            Error::ApplicationMismatch(_) | Error::UnknownCommand { .. } => StatusWord::NOT_FOUND,
            Error::FileMismatch(_) | Error::NotSelected | Error::EmptyFile(_) => {
                StatusWord::FILE_NOT_FOUND
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
