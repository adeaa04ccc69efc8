// hcecard/src/notify/traits.rs

use super::Event;

/// Notifier trait abstracts the channel to the controlling application away
/// from the protocol state machines.
///
/// `notify` is called on the command-processing thread and must not block;
/// implementations hand the event off and return.
pub trait Notifier: Send + Sync {
    fn notify(&self, event: Event);
}

impl<F> Notifier for F
where
    F: Fn(Event) + Send + Sync,
{
    fn notify(&self, event: Event) {
        self(event)
    }
}

/// Drops every event. Used when no controlling application is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _event: Event) {}
}
