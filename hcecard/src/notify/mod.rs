// hcecard/src/notify/mod.rs

pub mod event;
pub mod mock;
pub mod traits;

pub use event::Event;
pub use mock::RecordingNotifier;
pub use traits::{NoopNotifier, Notifier};
