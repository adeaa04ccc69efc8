// hcecard/src/ndef/store.rs

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::info;

use crate::Result;

/// Content of the emulated NDEF file, shared between the tag service (reads)
/// and the controlling application (writes). Absent until first set.
#[derive(Debug, Clone, Default)]
pub struct NdefStore {
    file: Arc<Mutex<Option<Arc<[u8]>>>>,
}

impl NdefStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the file content with raw bytes.
    pub fn set(&self, content: impl Into<Vec<u8>>) {
        let content: Vec<u8> = content.into();
        info!("ndef file set ({} bytes)", content.len());
        *self.lock() = Some(Arc::from(content));
    }

    /// Encode `text` as a single Text record TLV and store it.
    pub fn set_text(&self, text: &str) -> Result<()> {
        let tlv = super::encode_text_tlv(text)?;
        self.set(tlv);
        Ok(())
    }

    pub fn clear(&self) {
        info!("ndef file cleared");
        *self.lock() = None;
    }

    /// Current content. Readers keep the snapshot even if the file is
    /// replaced concurrently.
    pub fn snapshot(&self) -> Option<Arc<[u8]>> {
        self.lock().clone()
    }

    pub fn is_set(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<[u8]>>> {
        self.file.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
