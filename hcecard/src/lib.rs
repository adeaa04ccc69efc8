// hcecard/src/lib.rs

//! hcecard
//!
//! Host card emulation engine. A host card-emulation runtime hands raw
//! command APDUs to a [`service::HostApduService`] and sends back whatever
//! bytes it returns. Two services are provided:
//!
//! - [`service::PaymentService`]: selected by AID `F0 01 02 03 04 05 06`; for
//!   every PAYMENT command it notifies the controlling application and blocks
//!   until a decision is submitted through the [`service::Controller`] or the
//!   configured timeout passes.
//! - [`service::NdefTagService`]: a read-only NFC Forum Type 4 Tag exposing
//!   a Capability Container and an NDEF file.
//!
//! Every failure is answered with a status word; nothing is propagated to
//! the host.
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod error;
pub mod ndef;
pub mod notify;
pub mod payment;
pub mod prelude;
pub mod protocol;
pub mod service;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available everywhere.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
