//! Event dispatcher.
//!
//! The [`Dispatcher`] owns the [`KioskController`] and is the only path by
//! which host events reach it. It handles one event at a time, so the
//! activation state has a single writer and needs no locking.

use lockdown_core::{KioskController, RestrictionAdapter};

use crate::{CommandAck, HostEvent, Response};

/// Routes host events to the controller.
#[derive(Debug)]
pub struct Dispatcher<A> {
    controller: KioskController<A>,
}

impl<A: RestrictionAdapter> Dispatcher<A> {
    /// Take ownership of a controller.
    pub fn new(controller: KioskController<A>) -> Self {
        Self { controller }
    }

    /// Handle a single host event.
    ///
    /// Decoded method calls are always acknowledged as accepted. A call that
    /// cannot be decoded is answered with its [`lockdown_core::CommandError`]
    /// and leaves the controller untouched.
    pub fn handle(&mut self, event: HostEvent) -> Response {
        match event {
            HostEvent::Call(call) => match call.decode() {
                Ok(command) => {
                    self.controller.apply(command);
                    Response::Ack(Ok(CommandAck::Accepted))
                },
                Err(e) => {
                    tracing::warn!(method = e.method(), "Rejected method call: {}", e);
                    Response::Ack(Err(e))
                },
            },
            HostEvent::Input(input) => Response::Decision(self.controller.handle_input(&input)),
            HostEvent::Lifecycle(signal) => {
                self.controller.handle_lifecycle(signal);
                Response::Handled
            },
        }
    }

    /// The controller.
    pub fn controller(&self) -> &KioskController<A> {
        &self.controller
    }

    /// Release the controller.
    pub fn into_controller(self) -> KioskController<A> {
        self.controller
    }
}
