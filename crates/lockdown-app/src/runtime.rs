//! Generic runtime for host event dispatch.
//!
//! The Runtime drives the single dispatch loop, coordinating between:
//! - [`Driver`]: where host events come from and replies go
//! - [`Dispatcher`]: the owner of the kiosk controller

use lockdown_core::{KioskController, RestrictionAdapter};

use crate::{Dispatcher, Driver};

/// Generic runtime that pairs a driver with a controller.
///
/// # Type Parameters
///
/// - `D`: host I/O driver
/// - `A`: platform restriction adapter
pub struct Runtime<D, A>
where
    D: Driver,
{
    driver: D,
    dispatcher: Dispatcher<A>,
}

impl<D, A> Runtime<D, A>
where
    D: Driver,
    A: RestrictionAdapter,
{
    /// Create a runtime that will own `controller`.
    pub fn new(driver: D, controller: KioskController<A>) -> Self {
        Self { driver, dispatcher: Dispatcher::new(controller) }
    }

    /// Run the dispatch loop until the driver has no more events.
    ///
    /// Events are handled strictly one at a time: poll, dispatch, reply.
    /// Returns the controller so the caller can inspect or reuse it.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver fails to poll or deliver a reply.
    pub async fn run(mut self) -> Result<KioskController<A>, D::Error> {
        while let Some(event) = self.driver.poll_event().await? {
            let response = self.dispatcher.handle(event);
            self.driver.respond(response)?;
        }

        tracing::debug!("Host event source closed, stopping runtime");
        self.driver.stop();
        Ok(self.dispatcher.into_controller())
    }
}
