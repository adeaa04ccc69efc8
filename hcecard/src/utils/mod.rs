//! Small helpers shared across the crate: hex rendering for APDU traces and
//! timeout defaults.

pub mod hex;
pub mod timeout;

pub use self::hex::*;
pub use self::timeout::*;
