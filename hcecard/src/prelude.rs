// hcecard/src/prelude.rs

pub use crate::config::Options;
pub use crate::notify::{Event, NoopNotifier, Notifier};
pub use crate::protocol::{Command, Response, StatusWord};
pub use crate::service::{
    Controller, Emulator, EmulatorBuilder, HostApduService, NdefTagService, PaymentService,
};
pub use crate::{Aid, DeactivationReason, Decision, Error, FileId, Result};

pub use crate::utils::{Hex, bytes_to_hex, parse_hex};
