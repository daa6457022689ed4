//! Restriction adapter contract.
//!
//! The [`RestrictionAdapter`] trait decouples the controller from the
//! platform's privileged primitives. The embedding application supplies the
//! real binding; tests use a simulated one.
//!
//! Every call must return promptly. If the platform equivalent is
//! asynchronous, the adapter reports once the request is issued and does not
//! wait for it to complete.

use crate::WindowProtection;

/// Outcome of a fallible adapter call.
///
/// A transient value: the controller logs and records it, it never becomes an
/// error for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdapterResult {
    /// The platform did what was asked.
    Success,
    /// The platform or its version lacks the primitive.
    Unsupported,
    /// The primitive exists but the app has not been granted it.
    PermissionDenied,
    /// Nothing to do; the platform was already in the requested state.
    AlreadyInDesiredState,
}

impl AdapterResult {
    /// Whether the requested effect is not in place after the call.
    pub fn is_failure(self) -> bool {
        matches!(self, Self::Unsupported | Self::PermissionDenied)
    }
}

impl std::fmt::Display for AdapterResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Unsupported => f.write_str("unsupported"),
            Self::PermissionDenied => f.write_str("permission denied"),
            Self::AlreadyInDesiredState => f.write_str("already in desired state"),
        }
    }
}

/// Privileged platform primitives used to enforce kiosk mode.
///
/// # Contract
///
/// - [`acquire_exclusive_foreground`](Self::acquire_exclusive_foreground) is
///   only called after
///   [`is_exclusive_foreground_held`](Self::is_exclusive_foreground_held)
///   returned `false`. Implementations may treat a second acquire as an error.
/// - Surface and window calls are visual only and report nothing.
/// - [`request_foreground`](Self::request_foreground) must bring the existing
///   app instance to the front. It must never start a second instance.
pub trait RestrictionAdapter {
    /// Enter the exclusive foreground lock.
    fn acquire_exclusive_foreground(&mut self) -> AdapterResult;

    /// Leave the exclusive foreground lock.
    fn release_exclusive_foreground(&mut self) -> AdapterResult;

    /// Whether the exclusive foreground lock is currently held.
    fn is_exclusive_foreground_held(&self) -> bool;

    /// Hide status and navigation bars. Best-effort.
    fn hide_transient_surfaces(&mut self);

    /// Restore status and navigation bars. Best-effort.
    fn show_transient_surfaces(&mut self);

    /// Ask the platform to bring this app instance back to the front.
    fn request_foreground(&mut self) -> AdapterResult;

    /// Apply window-level protections. Best-effort.
    fn apply_window_protection(&mut self, protection: WindowProtection);
}

/// Adapter for hosts without any privileged primitives.
///
/// Every fallible call reports [`AdapterResult::Unsupported`] and the lock is
/// never held. With this adapter the controller enforces through its
/// input policy and lifecycle guard alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedAdapter;

impl RestrictionAdapter for UnsupportedAdapter {
    fn acquire_exclusive_foreground(&mut self) -> AdapterResult {
        AdapterResult::Unsupported
    }

    fn release_exclusive_foreground(&mut self) -> AdapterResult {
        AdapterResult::Unsupported
    }

    fn is_exclusive_foreground_held(&self) -> bool {
        false
    }

    fn hide_transient_surfaces(&mut self) {}

    fn show_transient_surfaces(&mut self) {}

    fn request_foreground(&mut self) -> AdapterResult {
        AdapterResult::Unsupported
    }

    fn apply_window_protection(&mut self, _protection: WindowProtection) {}
}
