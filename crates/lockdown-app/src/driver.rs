//! Driver trait for abstracting host I/O.
//!
//! The [`Driver`] trait decouples the dispatch loop from how host events
//! arrive and how replies travel back. The generic [`crate::Runtime`] does
//! the orchestration; each embedding supplies a driver.

use std::future::Future;

use crate::{HostEvent, Response};

/// Abstracts host I/O for the kiosk runtime.
///
/// # Implementations
///
/// - **Channel**: [`crate::ChannelDriver`], fed by cloneable
///   [`crate::KioskHandle`]s over tokio channels
/// - **Platform**: a binding that receives key events and lifecycle callbacks
///   directly from the host UI framework
pub trait Driver: Send {
    /// Driver-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next host event.
    ///
    /// Returns `Ok(None)` once no more events will arrive.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<HostEvent>, Self::Error>> + Send;

    /// Deliver the reply to the most recently polled event.
    ///
    /// # Errors
    ///
    /// Returns an error if the reply cannot be delivered.
    fn respond(&mut self, response: Response) -> Result<(), Self::Error>;

    /// Release driver resources.
    fn stop(&mut self);
}
