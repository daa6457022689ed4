//! Reference model of the kiosk controller.
//!
//! Deliberately naive: a boolean and the rules written out longhand. The real
//! controller is checked against it step by step.

use lockdown_core::{Decision, KeyClass};

use super::operation::{Operation, OperationResult};

/// Reference kiosk model.
#[derive(Debug, Clone, Default)]
pub struct ModelKiosk {
    active: bool,
}

impl ModelKiosk {
    /// Create an inactive model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the model is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Apply an operation and return its expected outcome.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        match *op {
            Operation::SetActive(active) => {
                self.active = active;
                OperationResult::Accepted { active }
            },
            Operation::Key { key, .. } => {
                let class = KeyClass::from(key);
                let blocked = matches!(
                    class,
                    KeyClass::Back
                        | KeyClass::Home
                        | KeyClass::AppSwitch
                        | KeyClass::Menu
                        | KeyClass::Power
                        | KeyClass::VolumeUp
                        | KeyClass::VolumeDown
                );
                if self.active && blocked {
                    OperationResult::Decision(Decision::Consume)
                } else {
                    OperationResult::Decision(Decision::PassThrough)
                }
            },
            Operation::Lifecycle { .. } => {
                OperationResult::ForegroundRequests(usize::from(self.active))
            },
            Operation::RevokeLock | Operation::SetCapability(_) => OperationResult::Platform,
        }
    }
}
