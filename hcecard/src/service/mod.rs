// hcecard/src/service/mod.rs

pub mod builder;
pub mod controller;
pub mod ndef;
pub mod payment;
pub mod traits;

pub use builder::{Emulator, EmulatorBuilder};
pub use controller::Controller;
pub use ndef::{NdefTagService, SelectionState};
pub use payment::PaymentService;
pub use traits::HostApduService;
