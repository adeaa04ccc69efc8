// hcecard/src/service/ndef.rs

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, info};

use crate::constants::{APDU_DATA_OFFSET, SELECT_BY_FILE_ID, SELECT_BY_NAME};
use crate::ndef::{NdefStore, capability_container};
use crate::protocol::{Command, CommandKind, Header, ReadBinary, Response, parser};
use crate::service::traits::{HostApduService, respond};
use crate::types::{Aid, DeactivationReason, FileId};
use crate::{Error, Result};

/// Which READ BINARY target is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Unselected,
    AppSelected,
    FileSelected(FileId),
}

impl SelectionState {
    pub fn is_app_selected(&self) -> bool {
        !matches!(self, Self::Unselected)
    }
}

/// Read-only Type 4 Tag: NDEF application with a Capability Container file
/// and an NDEF file whose content comes from an [`NdefStore`].
#[derive(Debug, Default)]
pub struct NdefTagService {
    store: NdefStore,
    selection: Mutex<SelectionState>,
}

impl NdefTagService {
    pub fn new(store: NdefStore) -> Self {
        Self {
            store,
            selection: Mutex::new(SelectionState::Unselected),
        }
    }

    pub fn store(&self) -> &NdefStore {
        &self.store
    }

    pub fn selection(&self) -> SelectionState {
        *self.lock()
    }

    /// Decode and execute one command.
    pub fn handle(&self, apdu: &[u8]) -> Result<Response> {
        let header = Header::parse(apdu)?;
        match header.kind() {
            CommandKind::Select => self.select(apdu),
            CommandKind::ReadBinary => {
                let req = ReadBinary::from_apdu(apdu)?;
                self.read_binary(req.offset, req.len)
            }
            CommandKind::Payment | CommandKind::Unknown => Err(Error::UnknownCommand {
                cla: header.cla,
                ins: header.ins,
            }),
        }
    }

    fn select(&self, apdu: &[u8]) -> Result<Response> {
        parser::ensure_len(apdu, APDU_DATA_OFFSET)?;
        let cmd = Command::decode(apdu)?;
        let params = cmd.header().params();
        if params == SELECT_BY_NAME {
            self.select_by_aid(cmd.data())
        } else if params == SELECT_BY_FILE_ID {
            self.select_by_file_id(cmd.data())
        } else {
            Err(Error::UnsupportedSelect {
                p1: cmd.p1(),
                p2: cmd.p2(),
            })
        }
    }

    /// SELECT by AID. Valid from any state; a mismatch leaves the tag unselected.
    pub fn select_by_aid(&self, aid: &[u8]) -> Result<Response> {
        let mut selection = self.lock();
        if Aid::NDEF.matches(aid) {
            info!("ndef: application selected");
            *selection = SelectionState::AppSelected;
            Ok(Response::success())
        } else {
            *selection = SelectionState::Unselected;
            Err(Error::ApplicationMismatch(aid.to_vec()))
        }
    }

    /// SELECT by file id. Requires the application to be selected; an unknown
    /// id keeps the current selection.
    pub fn select_by_file_id(&self, id: &[u8]) -> Result<Response> {
        let mut selection = self.lock();
        if !selection.is_app_selected() {
            return Err(Error::NotSelected);
        }

        match FileId::from_slice(id) {
            Some(file) if file == FileId::CAPABILITY_CONTAINER || file == FileId::NDEF => {
                debug!("ndef: file {} selected", file);
                *selection = SelectionState::FileSelected(file);
                Ok(Response::success())
            }
            _ => Err(Error::FileMismatch(id.to_vec())),
        }
    }

    /// READ BINARY on the selected file, clamped to its size.
    pub fn read_binary(&self, offset: usize, len: usize) -> Result<Response> {
        let file = match self.selection() {
            SelectionState::FileSelected(file) => file,
            SelectionState::Unselected | SelectionState::AppSelected => {
                return Err(Error::NotSelected);
            }
        };

        let data = if file == FileId::CAPABILITY_CONTAINER {
            let cc = capability_container();
            parser::clamped_range(&cc, offset, len).to_vec()
        } else if file == FileId::NDEF {
            let content = self.store.snapshot().ok_or(Error::EmptyFile(file))?;
            parser::clamped_range(&content, offset, len).to_vec()
        } else {
            return Err(Error::FileMismatch(file.to_be_bytes().to_vec()));
        };

        debug!(
            "ndef: read {} bytes of {} at offset {}",
            data.len(),
            file,
            offset
        );
        Ok(Response::success_with(data))
    }

    fn lock(&self) -> MutexGuard<'_, SelectionState> {
        self.selection.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HostApduService for NdefTagService {
    fn aid(&self) -> Aid {
        Aid::NDEF
    }

    fn process_command_apdu(&self, apdu: &[u8]) -> Vec<u8> {
        respond("ndef", apdu, self.handle(apdu))
    }

    fn on_deactivated(&self, reason: DeactivationReason) {
        info!("ndef: deactivated ({})", reason);
        *self.lock() = SelectionState::Unselected;
    }
}
