//! Input filtering policy.
//!
//! A pure function of (key class, activation state). It keeps no memory of
//! earlier events, so the press and the release of the same key are judged
//! independently and always agree.

use crate::{ActivationState, InputEvent, KeyClass};

/// What the host should do with an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Swallow the event; the host must not act on it.
    Consume,
    /// Hand the event to the default host handling.
    PassThrough,
}

impl Decision {
    /// Whether the event is swallowed.
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consume)
    }
}

/// Stateless consume/pass-through policy for key events.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputPolicy;

impl InputPolicy {
    /// Decide the fate of a key class under the given state.
    ///
    /// Exempt classes pass through unconditionally so calls can always be
    /// answered or ended. Restricted classes are consumed only while active.
    pub fn decide(class: KeyClass, state: ActivationState) -> Decision {
        if class.is_exempt() {
            return Decision::PassThrough;
        }

        if state.is_active() && class.is_restricted() {
            Decision::Consume
        } else {
            Decision::PassThrough
        }
    }

    /// Decide the fate of a concrete event. The phase does not matter.
    pub fn decide_event(event: &InputEvent, state: ActivationState) -> Decision {
        Self::decide(event.class, state)
    }
}
