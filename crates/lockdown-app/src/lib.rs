//! Host application layer for Lockdown.
//!
//! Connects the pure [`lockdown_core::KioskController`] to the embedding
//! application: decodes command-channel calls, routes key events and
//! lifecycle signals, and runs everything through one dispatch loop.
//!
//! # Components
//!
//! - [`Dispatcher`]: owns the controller, turns a [`HostEvent`] into a [`Response`]
//! - [`Driver`]: trait for host-specific I/O
//! - [`Runtime`]: generic dispatch loop over a Driver
//! - [`KioskHandle`] / [`ChannelDriver`]: tokio channel transport

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod channel;
mod dispatcher;
mod driver;
mod error;
mod event;
mod runtime;

pub use channel::{ChannelDriver, DEFAULT_CHANNEL_CAPACITY, KioskHandle, channel};
pub use dispatcher::Dispatcher;
pub use driver::Driver;
pub use error::ChannelError;
pub use event::{CommandAck, HostEvent, Response};
pub use runtime::Runtime;
