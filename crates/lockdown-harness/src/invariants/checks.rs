//! Standard invariant checks.
//!
//! These capture WHAT must be true after any step, not specific scenarios.

use lockdown_core::Decision;

use super::{Invariant, InvariantResult, KioskSnapshot, Violation};

/// The exclusive lock is only ever held while active.
///
/// A held lock after deactivation would leave the user stuck in the app.
pub struct LockImpliesActive;

impl Invariant for LockImpliesActive {
    fn name(&self) -> &'static str {
        "lock_implies_active"
    }

    fn check(&self, state: &KioskSnapshot) -> InvariantResult {
        if state.lock_held && !state.state.is_active() {
            return Err(Violation {
                invariant: self.name(),
                message: "exclusive lock held while inactive".to_string(),
            });
        }
        Ok(())
    }
}

/// Transient surfaces are hidden exactly while active.
pub struct SurfacesFollowState;

impl Invariant for SurfacesFollowState {
    fn name(&self) -> &'static str {
        "surfaces_follow_state"
    }

    fn check(&self, state: &KioskSnapshot) -> InvariantResult {
        if state.surfaces_hidden != state.state.is_active() {
            return Err(Violation {
                invariant: self.name(),
                message: format!(
                    "surfaces hidden = {} while state is {}",
                    state.surfaces_hidden, state.state
                ),
            });
        }
        Ok(())
    }
}

/// Acquire is never issued while the lock is held.
pub struct NoRedundantAcquire;

impl Invariant for NoRedundantAcquire {
    fn name(&self) -> &'static str {
        "no_redundant_acquire"
    }

    fn check(&self, state: &KioskSnapshot) -> InvariantResult {
        if state.redundant_acquires > 0 {
            return Err(Violation {
                invariant: self.name(),
                message: format!("{} acquire(s) on a held lock", state.redundant_acquires),
            });
        }
        Ok(())
    }
}

/// Release is never issued while the lock is free.
pub struct NoReleaseWhileFree;

impl Invariant for NoReleaseWhileFree {
    fn name(&self) -> &'static str {
        "no_release_while_free"
    }

    fn check(&self, state: &KioskSnapshot) -> InvariantResult {
        if state.releases_while_free > 0 {
            return Err(Violation {
                invariant: self.name(),
                message: format!("{} release(s) on a free lock", state.releases_while_free),
            });
        }
        Ok(())
    }
}

/// Call keys always pass through.
pub struct ExemptPassThrough;

impl Invariant for ExemptPassThrough {
    fn name(&self) -> &'static str {
        "exempt_pass_through"
    }

    fn check(&self, state: &KioskSnapshot) -> InvariantResult {
        for (class, decision) in &state.decisions {
            if class.is_exempt() && *decision != Decision::PassThrough {
                return Err(Violation {
                    invariant: self.name(),
                    message: format!("{class:?} consumed while {}", state.state),
                });
            }
        }
        Ok(())
    }
}

/// Restricted keys are consumed exactly while active.
pub struct RestrictedFollowsState;

impl Invariant for RestrictedFollowsState {
    fn name(&self) -> &'static str {
        "restricted_follows_state"
    }

    fn check(&self, state: &KioskSnapshot) -> InvariantResult {
        for (class, decision) in &state.decisions {
            if class.is_restricted() && decision.is_consumed() != state.state.is_active() {
                return Err(Violation {
                    invariant: self.name(),
                    message: format!("{class:?} -> {decision:?} while {}", state.state),
                });
            }
        }
        Ok(())
    }
}
