//! Lifecycle guard.
//!
//! Second line of defence behind the exclusive foreground lock. The lock is
//! not always obtainable (old platform, missing privilege, device policy), so
//! whenever the app is about to leave the foreground while active, the guard
//! asks for it to be brought straight back.
//!
//! The guard only decides. It returns a [`GuardAction`] for the controller to
//! execute against its adapter.

use crate::ActivationState;

/// Host notification that the app is about to lose the foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleSignal {
    /// The app is being paused.
    Paused,
    /// The user initiated leaving the app (home, recents).
    UserLeaving,
}

impl LifecycleSignal {
    /// Whether the signal means the app is about to lose the foreground.
    pub fn is_foreground_loss(self) -> bool {
        match self {
            Self::Paused | Self::UserLeaving => true,
        }
    }
}

/// Work the guard asks the controller to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardAction {
    /// Bring the existing app instance back to the front.
    RequestForeground,
}

/// Decides whether a lifecycle signal needs a re-foreground request.
#[derive(Debug, Clone, Copy, Default)]
pub struct LifecycleGuard;

impl LifecycleGuard {
    /// React to a lifecycle signal under the given state.
    ///
    /// Returns at most one action per signal.
    pub fn on_signal(signal: LifecycleSignal, state: ActivationState) -> Option<GuardAction> {
        (state.is_active() && signal.is_foreground_loss()).then_some(GuardAction::RequestForeground)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_pause_requests_foreground() {
        assert_eq!(
            LifecycleGuard::on_signal(LifecycleSignal::Paused, ActivationState::Active),
            Some(GuardAction::RequestForeground)
        );
        assert_eq!(
            LifecycleGuard::on_signal(LifecycleSignal::UserLeaving, ActivationState::Active),
            Some(GuardAction::RequestForeground)
        );
    }

    #[test]
    fn inactive_signals_do_nothing() {
        assert_eq!(LifecycleGuard::on_signal(LifecycleSignal::Paused, ActivationState::Inactive), None);
        assert_eq!(
            LifecycleGuard::on_signal(LifecycleSignal::UserLeaving, ActivationState::Inactive),
            None
        );
    }
}
