//! Host events and the responses they produce.
//!
//! Everything the embedding application sends to the controller is a
//! [`HostEvent`]; every event gets exactly one [`Response`].

use lockdown_core::{CommandError, Decision, InputEvent, LifecycleSignal, MethodCall};

/// Events delivered by the host to the dispatch loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Command-channel method call.
    Call(MethodCall),

    /// Key event that needs a consume/pass-through decision.
    Input(InputEvent),

    /// Foreground lifecycle notification.
    Lifecycle(LifecycleSignal),
}

/// Acknowledgement of a delivered command.
///
/// Only says the command reached the controller, never whether the platform
/// restriction took effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAck {
    /// Command accepted.
    Accepted,
}

/// Reply to a single [`HostEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Reply to [`HostEvent::Call`].
    Ack(Result<CommandAck, CommandError>),

    /// Reply to [`HostEvent::Input`].
    Decision(Decision),

    /// Reply to [`HostEvent::Lifecycle`].
    Handled,
}
