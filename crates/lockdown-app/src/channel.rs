//! Tokio channel transport for host events.
//!
//! [`channel`] returns a cloneable [`KioskHandle`] and the [`ChannelDriver`]
//! that feeds a [`crate::Runtime`]. Any number of handles may send; the
//! runtime still handles their events one at a time, in arrival order.

use std::future::Future;

use lockdown_core::{Decision, InputEvent, LifecycleSignal, MethodCall};
use tokio::sync::{mpsc, oneshot};

use crate::{ChannelError, CommandAck, Driver, HostEvent, Response};

/// Default request queue depth.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// A host event with its reply slot.
#[derive(Debug)]
struct Request {
    event: HostEvent,
    reply: oneshot::Sender<Response>,
}

/// Create a connected handle/driver pair with the given queue depth.
pub fn channel(capacity: usize) -> (KioskHandle, ChannelDriver) {
    let (tx, rx) = mpsc::channel(capacity);
    (KioskHandle { tx }, ChannelDriver { rx, pending: None })
}

/// Cloneable sender side of the command channel.
#[derive(Debug, Clone)]
pub struct KioskHandle {
    tx: mpsc::Sender<Request>,
}

impl KioskHandle {
    /// Send a host event and wait for its reply.
    ///
    /// # Errors
    ///
    /// - `ChannelError::Closed` if the runtime has stopped
    /// - `ChannelError::ReplyDropped` if the runtime went away mid-request
    pub async fn send(&self, event: HostEvent) -> Result<Response, ChannelError> {
        let (reply, rx) = oneshot::channel();
        self.tx.send(Request { event, reply }).await.map_err(|_| ChannelError::Closed)?;
        rx.await.map_err(|_| ChannelError::ReplyDropped)
    }

    /// Deliver a raw method call.
    ///
    /// # Errors
    ///
    /// `ChannelError::Rejected` if the call cannot be decoded, plus the
    /// transport errors of [`KioskHandle::send`].
    pub async fn call(&self, call: MethodCall) -> Result<CommandAck, ChannelError> {
        match self.send(HostEvent::Call(call)).await? {
            Response::Ack(ack) => Ok(ack?),
            Response::Decision(_) | Response::Handled => {
                Err(ChannelError::UnexpectedResponse("method call"))
            },
        }
    }

    /// Turn kiosk mode on or off.
    pub async fn set_active(&self, active: bool) -> Result<CommandAck, ChannelError> {
        self.call(MethodCall::set_active(active)).await
    }

    /// Ask for a decision on a key event.
    pub async fn input(&self, event: InputEvent) -> Result<Decision, ChannelError> {
        match self.send(HostEvent::Input(event)).await? {
            Response::Decision(decision) => Ok(decision),
            Response::Ack(_) | Response::Handled => Err(ChannelError::UnexpectedResponse("input")),
        }
    }

    /// Report a lifecycle signal.
    pub async fn lifecycle(&self, signal: LifecycleSignal) -> Result<(), ChannelError> {
        match self.send(HostEvent::Lifecycle(signal)).await? {
            Response::Handled => Ok(()),
            Response::Ack(_) | Response::Decision(_) => {
                Err(ChannelError::UnexpectedResponse("lifecycle"))
            },
        }
    }
}

/// Receiver side of the command channel.
#[derive(Debug)]
pub struct ChannelDriver {
    rx: mpsc::Receiver<Request>,
    /// Reply slot of the most recently polled request.
    pending: Option<oneshot::Sender<Response>>,
}

impl Driver for ChannelDriver {
    type Error = ChannelError;

    fn poll_event(&mut self) -> impl Future<Output = Result<Option<HostEvent>, Self::Error>> + Send {
        async move {
            match self.rx.recv().await {
                Some(Request { event, reply }) => {
                    self.pending = Some(reply);
                    Ok(Some(event))
                },
                None => Ok(None),
            }
        }
    }

    fn respond(&mut self, response: Response) -> Result<(), Self::Error> {
        let reply = self.pending.take().ok_or(ChannelError::NoPendingRequest)?;
        if reply.send(response).is_err() {
            tracing::debug!("Requester went away before the reply was sent");
        }
        Ok(())
    }

    fn stop(&mut self) {
        self.pending = None;
        self.rx.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn respond_without_request_fails() {
        let (_handle, mut driver) = channel(1);
        assert_eq!(driver.respond(Response::Handled), Err(ChannelError::NoPendingRequest));
    }

    #[tokio::test]
    async fn dropping_handles_ends_polling() {
        let (handle, mut driver) = channel(1);
        drop(handle);
        assert_eq!(driver.poll_event().await, Ok(None));
    }

    #[tokio::test]
    async fn send_after_stop_is_closed() {
        let (handle, mut driver) = channel(1);
        driver.stop();
        assert_eq!(handle.lifecycle(LifecycleSignal::Paused).await, Err(ChannelError::Closed));
    }
}
