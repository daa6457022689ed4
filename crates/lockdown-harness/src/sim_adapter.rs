//! Simulated platform binding.
//!
//! `SimAdapter` stands in for the privileged platform primitives. It models a
//! single exclusive foreground lock and the visibility of the transient system
//! surfaces, lets tests choose whether the platform grants, denies or lacks
//! the lock, and journals every call so tests can count them.
//!
//! # Strictness
//!
//! Real platforms may reject a second acquire of a lock that is already held,
//! or a release of a lock that is not. The simulation answers both with
//! [`AdapterResult::AlreadyInDesiredState`] and counts them, so invariant
//! checks can prove the controller never makes either call.

use arbitrary::Arbitrary;
use lockdown_core::{AdapterResult, RestrictionAdapter, WindowProtection};

/// How the simulated platform answers lock requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum Capability {
    /// Lock requests succeed.
    Granted,
    /// The primitive exists but the app lacks the privilege.
    Denied,
    /// The platform has no such primitive.
    Unsupported,
}

/// A call made to the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterCall {
    /// `acquire_exclusive_foreground`
    Acquire,
    /// `release_exclusive_foreground`
    Release,
    /// `hide_transient_surfaces`
    Hide,
    /// `show_transient_surfaces`
    Show,
    /// `request_foreground`
    RequestForeground,
    /// `apply_window_protection`
    ApplyWindowProtection(WindowProtection),
}

/// Simulated restriction adapter.
#[derive(Debug, Clone)]
pub struct SimAdapter {
    capability: Capability,
    /// Result returned by every re-foreground request.
    foreground_result: AdapterResult,
    lock_held: bool,
    surfaces_hidden: bool,
    window_protection: Option<WindowProtection>,
    redundant_acquires: usize,
    releases_while_free: usize,
    journal: Vec<AdapterCall>,
}

impl SimAdapter {
    /// Create a simulated platform with the given lock capability.
    pub fn new(capability: Capability) -> Self {
        Self {
            capability,
            foreground_result: AdapterResult::Success,
            lock_held: false,
            surfaces_hidden: false,
            window_protection: None,
            redundant_acquires: 0,
            releases_while_free: 0,
            journal: Vec::new(),
        }
    }

    /// Platform that grants the exclusive lock.
    pub fn granted() -> Self {
        Self::new(Capability::Granted)
    }

    /// Platform that denies the exclusive lock.
    pub fn denied() -> Self {
        Self::new(Capability::Denied)
    }

    /// Platform without an exclusive lock primitive.
    pub fn unsupported() -> Self {
        Self::new(Capability::Unsupported)
    }

    /// Answer every re-foreground request with `result`.
    pub fn with_foreground_result(mut self, result: AdapterResult) -> Self {
        self.foreground_result = result;
        self
    }

    /// Change how future lock requests are answered.
    pub fn set_capability(&mut self, capability: Capability) {
        self.capability = capability;
    }

    /// Drop the lock from outside the app, as a device administrator could.
    pub fn revoke_lock(&mut self) {
        if self.lock_held {
            tracing::trace!("Simulated platform revoked exclusive lock");
        }
        self.lock_held = false;
    }

    /// Whether the exclusive lock is held.
    pub fn lock_held(&self) -> bool {
        self.lock_held
    }

    /// Whether the transient surfaces are hidden.
    pub fn surfaces_hidden(&self) -> bool {
        self.surfaces_hidden
    }

    /// Last applied window protection. `None` if never applied.
    pub fn window_protection(&self) -> Option<WindowProtection> {
        self.window_protection
    }

    /// Acquires issued while the lock was already held.
    pub fn redundant_acquires(&self) -> usize {
        self.redundant_acquires
    }

    /// Releases issued while the lock was not held.
    pub fn releases_while_free(&self) -> usize {
        self.releases_while_free
    }

    /// Every call in order.
    pub fn journal(&self) -> &[AdapterCall] {
        &self.journal
    }

    /// Number of journaled calls equal to `call`.
    pub fn count(&self, call: AdapterCall) -> usize {
        self.journal.iter().filter(|c| **c == call).count()
    }

    /// Forget previous calls. Platform state is kept.
    pub fn clear_journal(&mut self) {
        self.journal.clear();
    }
}

impl Default for SimAdapter {
    fn default() -> Self {
        Self::granted()
    }
}

impl RestrictionAdapter for SimAdapter {
    fn acquire_exclusive_foreground(&mut self) -> AdapterResult {
        self.journal.push(AdapterCall::Acquire);

        if self.lock_held {
            self.redundant_acquires += 1;
            return AdapterResult::AlreadyInDesiredState;
        }

        match self.capability {
            Capability::Granted => {
                self.lock_held = true;
                AdapterResult::Success
            },
            Capability::Denied => AdapterResult::PermissionDenied,
            Capability::Unsupported => AdapterResult::Unsupported,
        }
    }

    fn release_exclusive_foreground(&mut self) -> AdapterResult {
        self.journal.push(AdapterCall::Release);

        if !self.lock_held {
            self.releases_while_free += 1;
            return AdapterResult::AlreadyInDesiredState;
        }

        self.lock_held = false;
        AdapterResult::Success
    }

    fn is_exclusive_foreground_held(&self) -> bool {
        self.lock_held
    }

    fn hide_transient_surfaces(&mut self) {
        self.journal.push(AdapterCall::Hide);
        self.surfaces_hidden = true;
    }

    fn show_transient_surfaces(&mut self) {
        self.journal.push(AdapterCall::Show);
        self.surfaces_hidden = false;
    }

    fn request_foreground(&mut self) -> AdapterResult {
        self.journal.push(AdapterCall::RequestForeground);
        self.foreground_result
    }

    fn apply_window_protection(&mut self, protection: WindowProtection) {
        self.journal.push(AdapterCall::ApplyWindowProtection(protection));
        self.window_protection = Some(protection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn granted_platform_holds_lock() {
        let mut adapter = SimAdapter::granted();
        assert_eq!(adapter.acquire_exclusive_foreground(), AdapterResult::Success);
        assert!(adapter.is_exclusive_foreground_held());
        assert_eq!(adapter.release_exclusive_foreground(), AdapterResult::Success);
        assert!(!adapter.is_exclusive_foreground_held());
    }

    #[test]
    fn denied_platform_never_holds_lock() {
        let mut adapter = SimAdapter::denied();
        assert_eq!(adapter.acquire_exclusive_foreground(), AdapterResult::PermissionDenied);
        assert!(!adapter.lock_held());
    }

    #[test]
    fn strict_calls_are_counted() {
        let mut adapter = SimAdapter::granted();
        let _ = adapter.acquire_exclusive_foreground();
        assert_eq!(adapter.acquire_exclusive_foreground(), AdapterResult::AlreadyInDesiredState);
        assert_eq!(adapter.redundant_acquires(), 1);

        adapter.revoke_lock();
        assert_eq!(adapter.release_exclusive_foreground(), AdapterResult::AlreadyInDesiredState);
        assert_eq!(adapter.releases_while_free(), 1);
    }

    #[test]
    fn journal_counts_calls() {
        let mut adapter = SimAdapter::unsupported();
        adapter.hide_transient_surfaces();
        adapter.hide_transient_surfaces();
        let _ = adapter.request_foreground();

        assert_eq!(adapter.count(AdapterCall::Hide), 2);
        assert_eq!(adapter.count(AdapterCall::RequestForeground), 1);

        adapter.clear_journal();
        assert!(adapter.journal().is_empty());
        assert!(adapter.surfaces_hidden());
    }
}
