//! Real controller wired to a simulated platform.
//!
//! `SimWorld` mirrors [`crate::ModelKiosk`]'s interface so model-based tests
//! and the fuzzer can drive both with the same [`Operation`] stream.

use lockdown_core::{KioskConfig, KioskController};

use crate::{
    AdapterCall, InvariantRegistry, KioskSnapshot, Operation, OperationResult, SimAdapter,
};

/// A kiosk controller running against a [`SimAdapter`].
#[derive(Debug)]
pub struct SimWorld {
    controller: KioskController<SimAdapter>,
}

impl SimWorld {
    /// Create a world with the default configuration.
    pub fn new(adapter: SimAdapter) -> Self {
        Self { controller: KioskController::new(adapter) }
    }

    /// Create a world with an explicit configuration.
    pub fn with_config(adapter: SimAdapter, config: KioskConfig) -> Self {
        Self { controller: KioskController::with_config(adapter, config) }
    }

    /// Apply an operation to the real controller.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        match *op {
            Operation::SetActive(active) => {
                self.controller.set_active(active);
                OperationResult::Accepted { active: self.controller.state().is_active() }
            },
            Operation::Key { key, release } => {
                let event = Operation::input_event(key, release);
                OperationResult::Decision(self.controller.handle_input(&event))
            },
            Operation::Lifecycle { user_leaving } => {
                let before = self.adapter().count(AdapterCall::RequestForeground);
                self.controller.handle_lifecycle(Operation::lifecycle_signal(user_leaving));
                let after = self.adapter().count(AdapterCall::RequestForeground);
                OperationResult::ForegroundRequests(after - before)
            },
            Operation::RevokeLock => {
                self.controller.adapter_mut().revoke_lock();
                OperationResult::Platform
            },
            Operation::SetCapability(capability) => {
                self.controller.adapter_mut().set_capability(capability);
                OperationResult::Platform
            },
        }
    }

    /// Apply every operation, checking `invariants` after each one.
    pub fn run(&mut self, ops: &[Operation], invariants: &InvariantRegistry) {
        for (step, op) in ops.iter().enumerate() {
            self.apply(op);
            invariants.assert_all(&self.snapshot(), &format!("after step {step} ({op:?})"));
        }
    }

    /// Capture observable state.
    pub fn snapshot(&self) -> KioskSnapshot {
        KioskSnapshot::capture(&self.controller)
    }

    /// The controller under test.
    pub fn controller(&self) -> &KioskController<SimAdapter> {
        &self.controller
    }

    /// The simulated platform.
    pub fn adapter(&self) -> &SimAdapter {
        self.controller.adapter()
    }
}
