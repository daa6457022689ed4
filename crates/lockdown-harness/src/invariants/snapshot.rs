//! Observable state snapshots for invariant checking.
//!
//! A snapshot captures the controller state, the simulated platform state and
//! the policy's answer for every named key class at one instant, so all
//! invariants see the same consistent picture.

use lockdown_core::{
    ActivationState, Decision, EXEMPT_CLASSES, InputEvent, KeyClass, KioskController,
    RESTRICTED_CLASSES,
};

use crate::SimAdapter;

/// Snapshot of a controller and its simulated platform.
#[derive(Debug, Clone, Default)]
pub struct KioskSnapshot {
    /// Recorded activation state.
    pub state: ActivationState,
    /// Whether the platform holds the exclusive lock.
    pub lock_held: bool,
    /// Whether the transient surfaces are hidden.
    pub surfaces_hidden: bool,
    /// Acquires issued on an already held lock.
    pub redundant_acquires: usize,
    /// Releases issued on a free lock.
    pub releases_while_free: usize,
    /// Policy decision for every restricted and exempt class.
    pub decisions: Vec<(KeyClass, Decision)>,
}

impl KioskSnapshot {
    /// Capture the observable state of `controller`.
    pub fn capture(controller: &KioskController<SimAdapter>) -> Self {
        let adapter = controller.adapter();
        let decisions = RESTRICTED_CLASSES
            .iter()
            .chain(EXEMPT_CLASSES.iter())
            .map(|&class| (class, controller.handle_input(&InputEvent::down(class))))
            .collect();

        Self {
            state: controller.state(),
            lock_held: adapter.lock_held(),
            surfaces_hidden: adapter.surfaces_hidden(),
            redundant_acquires: adapter.redundant_acquires(),
            releases_while_free: adapter.releases_while_free(),
            decisions,
        }
    }
}
