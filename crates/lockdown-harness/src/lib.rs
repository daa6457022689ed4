//! Deterministic simulation harness for the Lockdown kiosk controller.
//!
//! A simulated platform binding ([`SimAdapter`]) with a configurable lock
//! capability and a call journal, so the controller can be exercised on
//! granting, denying and unsupported platforms without a device.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference implementation. Operations are
//! applied to both the model and a [`SimWorld`], and their observable results
//! are compared.
//!
//! # Invariant Testing
//!
//! The `invariants` module checks properties that must hold after every step.
//! Use [`InvariantRegistry::standard()`] for the full set.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod model;
pub mod sim_adapter;
pub mod sim_world;

pub use invariants::{
    ExemptPassThrough, Invariant, InvariantRegistry, InvariantResult, KioskSnapshot,
    LockImpliesActive, NoRedundantAcquire, NoReleaseWhileFree, RestrictedFollowsState,
    SurfacesFollowState, Violation,
};
pub use model::{KeyChoice, ModelKiosk, Operation, OperationResult};
pub use sim_adapter::{AdapterCall, Capability, SimAdapter};
pub use sim_world::SimWorld;
