//! Logging decorator for restriction adapters.
//!
//! Wraps any [`RestrictionAdapter`] and emits an `info` event for every
//! platform call and its result, so a console session shows exactly what the
//! controller asked of the platform.

use lockdown_core::{AdapterResult, RestrictionAdapter, WindowProtection};

/// Adapter that logs every call before delegating.
#[derive(Debug, Clone, Default)]
pub struct LoggingAdapter<A> {
    inner: A,
}

impl<A> LoggingAdapter<A> {
    /// Wrap `inner`.
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    /// The wrapped adapter.
    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: RestrictionAdapter> RestrictionAdapter for LoggingAdapter<A> {
    fn acquire_exclusive_foreground(&mut self) -> AdapterResult {
        let result = self.inner.acquire_exclusive_foreground();
        tracing::info!(%result, "platform: acquire exclusive foreground");
        result
    }

    fn release_exclusive_foreground(&mut self) -> AdapterResult {
        let result = self.inner.release_exclusive_foreground();
        tracing::info!(%result, "platform: release exclusive foreground");
        result
    }

    fn is_exclusive_foreground_held(&self) -> bool {
        let held = self.inner.is_exclusive_foreground_held();
        tracing::trace!(held, "platform: query exclusive foreground");
        held
    }

    fn hide_transient_surfaces(&mut self) {
        tracing::info!("platform: hide transient surfaces");
        self.inner.hide_transient_surfaces();
    }

    fn show_transient_surfaces(&mut self) {
        tracing::info!("platform: show transient surfaces");
        self.inner.show_transient_surfaces();
    }

    fn request_foreground(&mut self) -> AdapterResult {
        let result = self.inner.request_foreground();
        tracing::info!(%result, "platform: request foreground");
        result
    }

    fn apply_window_protection(&mut self, protection: WindowProtection) {
        tracing::info!(
            secure_surface = protection.secure_surface,
            keep_screen_on = protection.keep_screen_on,
            "platform: apply window protection"
        );
        self.inner.apply_window_protection(protection);
    }
}
