//! Reference model for model-based testing.
//!
//! Operations are applied to both [`ModelKiosk`] and a real controller (see
//! [`crate::SimWorld`]) and their observable results compared.

mod kiosk;
mod operation;

pub use kiosk::ModelKiosk;
pub use operation::{KeyChoice, Operation, OperationResult};
