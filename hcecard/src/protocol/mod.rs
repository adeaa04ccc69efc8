// hcecard/src/protocol/mod.rs

pub mod builders;
pub mod command;
pub mod parser;
pub mod response;
pub mod status;

pub use command::{Command, CommandKind, Header, ReadBinary};
pub use response::Response;
pub use status::StatusWord;
