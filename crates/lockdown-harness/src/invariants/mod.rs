//! Invariant checking for simulation testing.
//!
//! Invariants are properties that must hold after every step, whatever
//! sequence of commands, key events and lifecycle signals led there.
//!
//! # Architecture
//!
//! Observable state is captured from a controller and its [`crate::SimAdapter`]
//! into a [`KioskSnapshot`], then every registered [`Invariant`] is run
//! against it.
//!
//! # Usage
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! let snapshot = KioskSnapshot::capture(&controller);
//! registry.check_all(&snapshot)?;
//! ```

mod checks;
mod snapshot;

pub use checks::{
    ExemptPassThrough, LockImpliesActive, NoRedundantAcquire, NoReleaseWhileFree,
    RestrictedFollowsState, SurfacesFollowState,
};
pub use snapshot::KioskSnapshot;

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Invariant violation with context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// Name of the violated invariant.
    pub invariant: &'static str,
    /// Description of what went wrong.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// An invariant that can be checked against a snapshot.
pub trait Invariant: Send + Sync {
    /// Invariant name for error reporting.
    fn name(&self) -> &'static str;

    /// Check the invariant against the captured state.
    fn check(&self, state: &KioskSnapshot) -> InvariantResult;
}

/// Registry of invariants to check.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Create a registry with every standard kiosk invariant.
    ///
    /// Includes:
    /// - [`LockImpliesActive`]: the exclusive lock is never held while inactive
    /// - [`SurfacesFollowState`]: surfaces are hidden exactly while active
    /// - [`NoRedundantAcquire`]: acquire is never issued on a held lock
    /// - [`NoReleaseWhileFree`]: release is never issued on a free lock
    /// - [`ExemptPassThrough`]: call keys are never consumed
    /// - [`RestrictedFollowsState`]: restricted keys are consumed iff active
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(LockImpliesActive);
        registry.add(SurfacesFollowState);
        registry.add(NoRedundantAcquire);
        registry.add(NoReleaseWhileFree);
        registry.add(ExemptPassThrough);
        registry.add(RestrictedFollowsState);
        registry
    }

    /// Add an invariant to the registry.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check all invariants against the given state.
    ///
    /// Returns `Ok(())` if all invariants hold, or all violations found.
    pub fn check_all(&self, state: &KioskSnapshot) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(state).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Check all invariants, panicking with every violation.
    ///
    /// Use this in tests where you want immediate failure with context.
    #[allow(clippy::panic)]
    pub fn assert_all(&self, state: &KioskSnapshot, context: &str) {
        if let Err(violations) = self.check_all(state) {
            let messages: Vec<_> = violations.iter().map(ToString::to_string).collect();
            panic!("Invariant violation {context}:\n  {}", messages.join("\n  "));
        }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}
