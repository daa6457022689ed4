//! Activation state of the kiosk controller.

/// Whether kiosk restrictions are in force.
///
/// Held only in process memory by a single [`crate::KioskController`]. A fresh
/// process always starts [`ActivationState::Inactive`]; the caller must
/// re-issue activation after a restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ActivationState {
    /// No restrictions. Every input passes through.
    #[default]
    Inactive,
    /// Restrictions in force.
    Active,
}

impl ActivationState {
    /// Whether restrictions are in force.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl From<bool> for ActivationState {
    fn from(active: bool) -> Self {
        if active { Self::Active } else { Self::Inactive }
    }
}

impl std::fmt::Display for ActivationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inactive => f.write_str("inactive"),
            Self::Active => f.write_str("active"),
        }
    }
}
