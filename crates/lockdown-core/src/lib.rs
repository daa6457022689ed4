//! Kiosk state controller for Lockdown.
//!
//! Pure, I/O-free logic that locks a device to the foreground application and
//! releases it again. Everything platform specific sits behind the
//! [`RestrictionAdapter`] trait, so the same controller runs against a real
//! platform binding in production and against a simulated one in tests.
//!
//! # Components
//!
//! - [`KioskController`]: owns the [`ActivationState`] and drives the adapter
//! - [`InputPolicy`]: stateless consume/pass-through decision for key events
//! - [`LifecycleGuard`]: re-asserts foreground when the app is about to lose it
//! - [`RestrictionAdapter`]: contract for privileged platform primitives
//! - [`Command`]: decoded command-channel requests
//!
//! # Failure Model
//!
//! Privileged operations may be unavailable or denied. The controller records
//! the outcome as an [`AdapterResult`], logs it and carries on: the caller of
//! [`KioskController::activate`] always sees the transition it asked for, and
//! the policy and guard keep enforcing off the recorded state.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod adapter;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod guard;
pub mod policy;
pub mod state;

pub use adapter::{AdapterResult, RestrictionAdapter, UnsupportedAdapter};
pub use command::{Command, LEGACY_SET_ACTIVE_METHOD, MethodCall, SET_ACTIVE_METHOD};
pub use config::{KioskConfig, WindowProtection};
pub use controller::KioskController;
pub use error::CommandError;
pub use event::{EXEMPT_CLASSES, InputEvent, KeyClass, KeyPhase, RESTRICTED_CLASSES};
pub use guard::{GuardAction, LifecycleGuard, LifecycleSignal};
pub use policy::{Decision, InputPolicy};
pub use state::ActivationState;
