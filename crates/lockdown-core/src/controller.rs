//! Kiosk state controller.
//!
//! Owns the [`ActivationState`] and is the only thing that changes it. Host
//! commands, key events and lifecycle signals all arrive here, one at a time,
//! from a single dispatch loop.
//!
//! # State Machine
//!
//! ```text
//!               activate()                  activate() (re-apply)
//! ┌──────────┐ ─────────────> ┌────────┐ <──────┐
//! │ Inactive │                │ Active │ ───────┘
//! └──────────┘ <───────────── └────────┘
//!   │    ^      deactivate()
//!   └────┘ deactivate() (no-op)
//! ```
//!
//! # Failure Semantics
//!
//! Adapter failures are logged and recorded in [`KioskController::lock_outcome`]
//! but never returned. The transition always happens, and the input policy
//! and lifecycle guard keep enforcing off the recorded state even when the
//! exclusive lock could not be obtained.

use crate::{
    ActivationState, AdapterResult, Command, Decision, GuardAction, InputEvent, InputPolicy,
    KioskConfig, LifecycleGuard, LifecycleSignal, RestrictionAdapter,
};

/// Kiosk state controller.
///
/// Generic over the platform binding so the same controller runs against a
/// real adapter and a simulated one.
#[derive(Debug)]
pub struct KioskController<A> {
    /// Current activation state.
    state: ActivationState,
    /// Platform binding.
    adapter: A,
    /// Configuration.
    config: KioskConfig,
    /// Last result of an acquire or release. `None` before the first attempt.
    lock_outcome: Option<AdapterResult>,
}

impl<A: RestrictionAdapter> KioskController<A> {
    /// Create an inactive controller with the default configuration.
    pub fn new(adapter: A) -> Self {
        Self::with_config(adapter, KioskConfig::default())
    }

    /// Create an inactive controller and apply the configured window
    /// protection.
    pub fn with_config(mut adapter: A, config: KioskConfig) -> Self {
        adapter.apply_window_protection(config.window_protection);

        Self { state: ActivationState::Inactive, adapter, config, lock_outcome: None }
    }

    /// Enter kiosk mode.
    ///
    /// Records the intent first, then hides transient surfaces and tries to
    /// take the exclusive foreground lock. Never fails. Calling it while
    /// already active repeats the restriction steps; the held-lock check keeps
    /// the privileged acquire from being issued twice.
    pub fn activate(&mut self) {
        if self.state.is_active() {
            tracing::debug!("Kiosk already active, re-applying restrictions");
        } else {
            tracing::info!("Activating kiosk mode");
        }

        self.state = ActivationState::Active;
        self.adapter.hide_transient_surfaces();

        if self.adapter.is_exclusive_foreground_held() {
            self.record_lock_outcome("acquire", AdapterResult::AlreadyInDesiredState);
            return;
        }

        let result = self.adapter.acquire_exclusive_foreground();
        self.record_lock_outcome("acquire", result);

        if result.is_failure() && self.config.foreground_fallback {
            self.request_foreground("lock fallback");
        }
    }

    /// Leave kiosk mode.
    ///
    /// Releases the exclusive lock only if the adapter reports it held, then
    /// restores transient surfaces. A pure no-op while inactive.
    pub fn deactivate(&mut self) {
        if !self.state.is_active() {
            tracing::debug!("Kiosk already inactive, nothing to release");
            return;
        }

        if self.adapter.is_exclusive_foreground_held() {
            let result = self.adapter.release_exclusive_foreground();
            self.record_lock_outcome("release", result);
        }

        self.adapter.show_transient_surfaces();
        self.state = ActivationState::Inactive;
        tracing::info!("Kiosk mode deactivated");
    }

    /// Activate or deactivate.
    pub fn set_active(&mut self, active: bool) {
        if active {
            self.activate();
        } else {
            self.deactivate();
        }
    }

    /// Execute a decoded command. Every command is accepted.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SetActive(active) => self.set_active(active),
        }
    }

    /// Decide what the host does with a key event.
    pub fn handle_input(&self, event: &InputEvent) -> Decision {
        let decision = InputPolicy::decide_event(event, self.state);
        if decision.is_consumed() {
            tracing::trace!(class = ?event.class, phase = ?event.phase, "Consumed key event");
        }
        decision
    }

    /// React to a lifecycle signal.
    ///
    /// Returns the guard action that was executed, if any.
    pub fn handle_lifecycle(&mut self, signal: LifecycleSignal) -> Option<GuardAction> {
        let action = LifecycleGuard::on_signal(signal, self.state)?;
        match action {
            GuardAction::RequestForeground => {
                tracing::debug!(?signal, "Foreground loss while active");
                self.request_foreground("lifecycle guard");
            },
        }
        Some(action)
    }

    /// Current activation state.
    pub fn state(&self) -> ActivationState {
        self.state
    }

    /// Last acquire or release result. `None` before the first attempt.
    pub fn lock_outcome(&self) -> Option<AdapterResult> {
        self.lock_outcome
    }

    /// Platform binding.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Mutable platform binding.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Issue a fire-and-forget re-foreground request.
    fn request_foreground(&mut self, reason: &'static str) {
        let result = self.adapter.request_foreground();
        if result.is_failure() {
            tracing::warn!(reason, %result, "Re-foreground request failed");
        }
    }

    fn record_lock_outcome(&mut self, operation: &'static str, result: AdapterResult) {
        match result {
            AdapterResult::Success => tracing::debug!(operation, "Exclusive foreground lock updated"),
            AdapterResult::AlreadyInDesiredState => {
                tracing::debug!(operation, "Exclusive foreground lock already in place");
            },
            AdapterResult::Unsupported | AdapterResult::PermissionDenied => {
                tracing::warn!(operation, %result, "Exclusive foreground lock unavailable");
            },
        }
        self.lock_outcome = Some(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KeyClass, UnsupportedAdapter, WindowProtection};

    /// Minimal adapter that grants everything and counts calls.
    #[derive(Debug, Default)]
    struct CountingAdapter {
        held: bool,
        acquires: usize,
        releases: usize,
        hides: usize,
        shows: usize,
        foreground_requests: usize,
        protection: Option<WindowProtection>,
    }

    impl RestrictionAdapter for CountingAdapter {
        fn acquire_exclusive_foreground(&mut self) -> AdapterResult {
            self.acquires += 1;
            self.held = true;
            AdapterResult::Success
        }

        fn release_exclusive_foreground(&mut self) -> AdapterResult {
            self.releases += 1;
            self.held = false;
            AdapterResult::Success
        }

        fn is_exclusive_foreground_held(&self) -> bool {
            self.held
        }

        fn hide_transient_surfaces(&mut self) {
            self.hides += 1;
        }

        fn show_transient_surfaces(&mut self) {
            self.shows += 1;
        }

        fn request_foreground(&mut self) -> AdapterResult {
            self.foreground_requests += 1;
            AdapterResult::Success
        }

        fn apply_window_protection(&mut self, protection: WindowProtection) {
            self.protection = Some(protection);
        }
    }

    #[test]
    fn starts_inactive_with_protection_applied() {
        let controller = KioskController::new(CountingAdapter::default());

        assert_eq!(controller.state(), ActivationState::Inactive);
        assert_eq!(controller.adapter().protection, Some(WindowProtection::default()));
        assert_eq!(controller.lock_outcome(), None);
    }

    #[test]
    fn activate_hides_then_locks() {
        let mut controller = KioskController::new(CountingAdapter::default());
        controller.activate();

        assert_eq!(controller.state(), ActivationState::Active);
        assert_eq!(controller.adapter().hides, 1);
        assert_eq!(controller.adapter().acquires, 1);
        assert_eq!(controller.lock_outcome(), Some(AdapterResult::Success));
    }

    #[test]
    fn reactivate_skips_acquire_when_held() {
        let mut controller = KioskController::new(CountingAdapter::default());
        controller.activate();
        controller.activate();

        assert_eq!(controller.adapter().hides, 2);
        assert_eq!(controller.adapter().acquires, 1);
        assert_eq!(controller.lock_outcome(), Some(AdapterResult::AlreadyInDesiredState));
    }

    #[test]
    fn deactivate_while_inactive_touches_nothing() {
        let mut controller = KioskController::new(CountingAdapter::default());
        controller.deactivate();

        let adapter = controller.adapter();
        assert_eq!((adapter.releases, adapter.shows), (0, 0));
    }

    #[test]
    fn round_trip_releases_and_shows_once() {
        let mut controller = KioskController::new(CountingAdapter::default());
        controller.activate();
        controller.deactivate();
        controller.deactivate();

        assert_eq!(controller.state(), ActivationState::Inactive);
        assert_eq!(controller.adapter().releases, 1);
        assert_eq!(controller.adapter().shows, 1);
        assert!(!controller.adapter().held);
    }

    #[test]
    fn unsupported_platform_still_activates() {
        let mut controller = KioskController::new(UnsupportedAdapter);
        controller.apply(Command::SetActive(true));

        assert_eq!(controller.state(), ActivationState::Active);
        assert_eq!(controller.lock_outcome(), Some(AdapterResult::Unsupported));
        assert_eq!(controller.handle_input(&InputEvent::down(KeyClass::Home)), Decision::Consume);
    }

    #[test]
    fn lifecycle_guard_only_fires_while_active() {
        let mut controller = KioskController::new(CountingAdapter::default());
        assert_eq!(controller.handle_lifecycle(LifecycleSignal::Paused), None);
        assert_eq!(controller.adapter().foreground_requests, 0);

        controller.activate();
        assert_eq!(
            controller.handle_lifecycle(LifecycleSignal::UserLeaving),
            Some(GuardAction::RequestForeground)
        );
        assert_eq!(controller.adapter().foreground_requests, 1);
    }
}
