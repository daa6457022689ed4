//! Scriptable console for the Lockdown kiosk controller.
//!
//! Runs the real [`lockdown_app::Runtime`] against a simulated platform and
//! feeds it host events read from a script, printing each reply.
//!
//! # Components
//!
//! - [`script`]: parser for the line-oriented event script
//! - [`platform`]: adapter decorator that logs every platform call
//! - [`describe`]: one-line rendering of an event and its reply

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod platform;
pub mod script;

use lockdown_app::{HostEvent, Response};

/// Render an event and its reply as a single console line.
pub fn describe(event: &HostEvent, response: &Response) -> String {
    let request = match event {
        HostEvent::Call(call) => match call.argument {
            Some(argument) => format!("call {}({argument})", call.method),
            None => format!("call {}()", call.method),
        },
        HostEvent::Input(input) => format!("key {:?} {:?}", input.class, input.phase),
        HostEvent::Lifecycle(signal) => format!("lifecycle {signal:?}"),
    };

    let reply = match response {
        Response::Ack(Ok(_)) => "accepted".to_string(),
        Response::Ack(Err(e)) => format!("rejected: {e}"),
        Response::Decision(decision) => format!("{decision:?}"),
        Response::Handled => "handled".to_string(),
    };

    format!("{request} -> {reply}")
}
